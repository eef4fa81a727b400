use homelab::HomelabError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// Render a library error with the remediation hint for its kind
pub fn format_homelab_error(
    err: &HomelabError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let block = match err {
        HomelabError::ConfigNotFound { path } => ErrorBlock::new(err.to_string()).with_fix(
            format!(
                "Create {} or point --config / HOMELAB_CONFIG at an existing file.",
                path.display()
            ),
        ),
        HomelabError::InvalidConfig { path, message } => ErrorBlock::new(message.as_str())
            .with_context(path.display().to_string())
            .with_fix("Fix the machines file and try again."),
        HomelabError::MachineNotFound { available, .. } if available.is_empty() => {
            ErrorBlock::new(err.to_string()).with_fix("No machines are configured yet.")
        }
        HomelabError::MachineNotFound { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Run `homelab list` to see configured machines."),
        HomelabError::ServiceNotFound { name, dir } => ErrorBlock::new(err.to_string())
            .with_fix(format!(
                "Create {} with the Quadlet files for '{}'.",
                dir.display(),
                name
            )),
        HomelabError::InvalidService { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Add a .container, .pod or .kube file to the service directory."),
        HomelabError::Connection { host, .. } => ErrorBlock::new(err.to_string()).with_fix(
            format!("Check that `ssh {}` works without a password prompt.", host),
        ),
        HomelabError::DaemonReload { .. } => ErrorBlock::new(err.to_string()).with_fix(
            "Files were changed but no service was started. Fix the host and sync again.",
        ),
        other => ErrorBlock::new(other.to_string()),
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<HomelabError>() {
        Some(homelab) => format_homelab_error(homelab, supports_color, supports_unicode),
        None => format!("[ERROR] {:#}\n", err),
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        }));
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
