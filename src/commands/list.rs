//! `homelab list`

use anyhow::Result;

use super::Project;
use crate::ui::context::UiContext;
use crate::ui::views::list::render_machine_list;

pub fn cmd_list(project: &Project, ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "list",
            "command": "list",
            "machines": project.config.machines,
        }))?;
    } else {
        print!("{}", render_machine_list(&project.config, ui.color));
    }
    Ok(())
}
