//! `homelab status`

use anyhow::Result;
use homelab::presentation::factory;

use super::Project;
use crate::ui::context::UiContext;
use crate::ui::views::status::render_status;

pub fn cmd_status(project: Project, machine: &str, metrics: bool, ui: &UiContext) -> Result<()> {
    let use_case =
        factory::create_status_use_case(&project.paths, project.config).with_metrics(metrics);
    let report = use_case.execute(machine)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "status",
            "command": "status",
            "report": report,
        }))?;
    } else {
        print!("{}", render_status(&report, ui.color, ui.unicode));
    }
    Ok(())
}
