//! `homelab undeploy`

use anyhow::Result;
use homelab::application::UndeployOptions;
use homelab::presentation::factory;

use super::{check_service_arg, event_sink, Project};
use crate::ui::context::UiContext;

pub fn cmd_undeploy(
    project: Project,
    machine: &str,
    service: Option<String>,
    yes: bool,
    dry_run: bool,
    ui: &UiContext,
) -> Result<()> {
    check_service_arg(service.as_deref())?;
    let use_case = factory::create_undeploy_use_case(project.config, yes);
    let options = UndeployOptions {
        service,
        dry_run,
        yes,
    };
    let outcome = use_case.execute(machine, &options, event_sink(ui, "undeploy", "Undeploy"))?;
    log::debug!("undeploy of {} finished: {:?}", machine, outcome);
    Ok(())
}
