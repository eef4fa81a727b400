//! Terminal renderer for sync events

use std::io::Write;

use homelab::domain::entities::ApplyPhase;
use homelab::domain::ports::{SyncEvent, SyncEventSink};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::plan::render_plan;
use crate::ui::views::sync::render_apply_summary;

/// Prints progress to stdout as events arrive
pub struct ConsoleEventSink {
    ui: UiContext,
    title: &'static str,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext, title: &'static str) -> Self {
        Self { ui, title }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    /// Event as text, `None` when this event is not shown
    fn render(&self, event: SyncEvent) -> Option<String> {
        let color = self.ui.color;
        let text = match event {
            SyncEvent::Started {
                machine,
                host,
                services,
                force,
            } => {
                let mut header =
                    CommandHeader::new(Icon::Sync, format!("{} {}", self.title, machine));
                header.add("Host", host);
                if !services.is_empty() {
                    header.add("Services", services.join(", "));
                }
                if force {
                    header.add("Mode", "force");
                }
                format!("\n{}", header.render(color, self.ui.unicode))
            }
            SyncEvent::Connected { host } => {
                format!("  {} Connected to {}", self.icon(Icon::Success), host)
            }
            SyncEvent::Notice { message } => {
                format!("  {} {}", self.icon(Icon::Warning), message)
            }
            SyncEvent::DriftDetected { service, file } => {
                if self.ui.verbose == 0 {
                    return None;
                }
                format!("  {} {}: {} differs", self.icon(Icon::Update), service, file)
            }
            SyncEvent::Planned { machine, plan } => {
                if !plan.has_changes() {
                    return None;
                }
                render_plan(&machine, &plan, color, self.ui.unicode)
            }
            SyncEvent::InSync { machine } => format!(
                "\n{} {}\n",
                self.icon(Icon::Success),
                ColoredText::success(format!("{} is already in sync", machine)).render(color)
            ),
            SyncEvent::DryRun { .. } => format!(
                "{}\n",
                ColoredText::warning("Dry run: no changes were made").render(color)
            ),
            SyncEvent::Cancelled { machine } => format!(
                "\n{} {}\n",
                self.icon(Icon::Error),
                ColoredText::warning(format!("Cancelled, {} was not changed", machine))
                    .render(color)
            ),
            SyncEvent::PhaseStarted { phase, units } => {
                let label = match phase {
                    ApplyPhase::Remove => format!("Removing {} service(s)", units),
                    ApplyPhase::Stop => format!("Stopping {} changed service(s)", units),
                    ApplyPhase::Upload => format!("Uploading {} service(s)", units),
                    ApplyPhase::Reload => "Reloading systemd".to_string(),
                    ApplyPhase::Start => format!("Starting {} service(s)", units),
                };
                format!("\n{}", ColoredText::info(label).render(color))
            }
            SyncEvent::UnitProgress {
                service,
                phase,
                detail,
            } => format!(
                "  {} {} {}",
                self.icon(Icon::Success),
                service,
                ColoredText::dim(format!("({} {})", phase, detail)).render(color)
            ),
            SyncEvent::UnitWarning {
                service, message, ..
            } => format!("  {} {}: {}", self.icon(Icon::Warning), service, message),
            SyncEvent::UnitFailed {
                service,
                phase,
                error,
            } => format!(
                "  {} {}: {} failed: {}",
                self.icon(Icon::Error),
                service,
                phase,
                ColoredText::error(error).render(color)
            ),
            SyncEvent::Reloaded { .. } => {
                format!("  {} Daemon reloaded", self.icon(Icon::Success))
            }
            SyncEvent::Completed { machine, summary } => format!(
                "\n{}",
                render_apply_summary(&machine, &summary, color, self.ui.unicode)
            ),
            SyncEvent::HostFailed { machine, error } => format!(
                "\n{} {}: {}\n",
                self.icon(Icon::Error),
                machine,
                ColoredText::error(error).render(color)
            ),
        };
        Some(text)
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        if let Some(text) = self.render(event) {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{}", text);
            let _ = out.flush();
        }
    }
}
