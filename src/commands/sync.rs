//! `homelab sync`

use anyhow::{bail, Result};
use homelab::application::{MultiHostReport, SyncOptions};
use homelab::presentation::factory;
use homelab::HomelabError;

use super::{check_service_arg, event_sink, Project};
use crate::ui::context::UiContext;
use crate::ui::views::sync::render_multi_host_summary;

#[derive(Debug, Clone, Default)]
pub struct SyncArgs {
    pub machine: Option<String>,
    pub all: bool,
    pub yes: bool,
    pub force: bool,
    pub dry_run: bool,
    pub service: Option<String>,
}

impl SyncArgs {
    fn options(&self) -> SyncOptions {
        let mut options = SyncOptions::new()
            .with_force(self.force)
            .with_dry_run(self.dry_run)
            .with_yes(self.yes);
        if let Some(service) = &self.service {
            options = options.with_service(service.clone());
        }
        options
    }
}

pub fn cmd_sync(project: Project, args: SyncArgs, ui: &UiContext) -> Result<()> {
    check_service_arg(args.service.as_deref())?;
    let options = args.options();
    let use_case = factory::create_sync_use_case(&project.paths, project.config, args.yes);
    let events = event_sink(ui, "sync", "Sync");

    if args.all {
        let report = use_case.execute_all(&options, events)?;
        return finish_all(&report, ui);
    }

    let Some(machine) = args.machine.as_deref() else {
        return Err(HomelabError::Usage("specify a machine or --all".to_string()).into());
    };
    let outcome = use_case.execute_with_events(machine, &options, events)?;
    log::debug!("sync of {} finished: {:?}", machine, outcome);
    Ok(())
}

fn finish_all(report: &MultiHostReport, ui: &UiContext) -> Result<()> {
    if !ui.json {
        println!("\n{}", render_multi_host_summary(report, ui.color, ui.unicode));
    }
    if report.has_errors() {
        let failed = report.failed_machines();
        bail!(
            "{} of {} machines failed: {}",
            failed.len(),
            report.hosts.len(),
            failed.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use homelab::domain::services::PlanScope;

    #[test]
    fn service_flag_narrows_scope() {
        let args = SyncArgs {
            machine: Some("nas".into()),
            service: Some("web".into()),
            dry_run: true,
            ..SyncArgs::default()
        };
        let options = args.options();
        assert_eq!(options.scope, PlanScope::Service("web".into()));
        assert!(options.dry_run);
        assert!(!options.force);
    }
}
