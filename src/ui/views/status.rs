use homelab::application::StatusReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_status(report: &StatusReport, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Status, format!("Status of {}", report.machine));
    header.add("Host", report.host.as_str());
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    if report.services.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("No services deployed").render(supports_color)
        ));
    }

    let width = report
        .services
        .iter()
        .map(|s| s.unit.len())
        .max()
        .unwrap_or(0);
    for unit in &report.services {
        let status = &unit.status;
        let (icon, state) = if status.failed {
            (Icon::Error, ColoredText::error("failed"))
        } else if status.active {
            (Icon::Success, ColoredText::success("active"))
        } else {
            (Icon::Inactive, ColoredText::dim("inactive"))
        };
        let mut line = format!(
            "  {} {:<width$}  {}",
            icon.colored(supports_color, supports_unicode),
            unit.unit,
            state.render(supports_color),
            width = width
        );
        if status.enabled {
            line.push_str(", enabled");
        }
        if !unit.in_config {
            line.push_str(&format!(
                " {}",
                ColoredText::warning("(not in config)").render(supports_color)
            ));
        }
        out.push_str(&line);
        out.push('\n');
        for container in &status.containers {
            out.push_str(&format!(
                "      {} {}\n",
                container.name,
                ColoredText::dim(container.status.as_str()).render(supports_color)
            ));
        }
        for metrics in &unit.metrics {
            let usage = format!(
                "cpu {}  mem {}  net {}",
                metrics.cpu, metrics.memory, metrics.network
            );
            out.push_str(&format!(
                "      {} {}\n",
                metrics.name,
                ColoredText::dim(usage).render(supports_color)
            ));
        }
    }

    if !report.missing.is_empty() {
        out.push_str(&format!(
            "\n  {} configured but not deployed: {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            report.missing.join(", ")
        ));
    }

    out.push_str(&format!(
        "\n{} total, {} active, {} failed, {} orphaned, {} missing\n",
        report.total(),
        report.active_count(),
        report.failed_count(),
        report.orphaned.len(),
        report.missing.len()
    ));
    out
}
