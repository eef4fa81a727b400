use homelab::application::MultiHostReport;
use homelab::domain::entities::ApplySummary;

use crate::ui::blocks::summary::ResultSummary;

pub fn render_apply_summary(
    machine: &str,
    summary: &ApplySummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = if summary.has_failures() {
        ResultSummary::partial(format!("{} synced with errors", machine))
    } else {
        ResultSummary::success(format!("{} synced", machine))
    };

    let stats = [
        ("added", summary.added.len()),
        ("updated", summary.updated.len()),
        ("removed", summary.removed.len()),
        ("failed", summary.failures.len()),
    ];
    for (label, count) in stats.into_iter().filter(|(_, n)| *n > 0) {
        block.add_stat(label, count);
    }
    for failure in &summary.failures {
        block.add_warning(format!(
            "{}: {} failed: {}",
            failure.unit, failure.phase, failure.error
        ));
    }
    for warning in &summary.warnings {
        block.add_warning(format!("{}: {}", warning.unit, warning.message));
    }
    if summary.has_failures() {
        block.with_next_step(format!("Run `homelab status {}` to inspect", machine));
    }

    block.render(supports_color, supports_unicode)
}

pub fn render_multi_host_summary(
    report: &MultiHostReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = if report.has_errors() {
        ResultSummary::partial("All machines: finished with errors")
    } else {
        ResultSummary::success("All machines synced")
    };
    block.add_stat("machines succeeded", report.succeeded_count());
    for host in &report.hosts {
        if let Err(e) = &host.result {
            block.add_warning(format!("{}: {}", host.machine, e));
        }
    }
    block.render(supports_color, supports_unicode)
}
