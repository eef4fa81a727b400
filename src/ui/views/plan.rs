use homelab::domain::services::SyncPlan;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Plan as shown before confirmation
pub fn render_plan(
    machine: &str,
    plan: &SyncPlan,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "\n{}\n",
        ColoredText::info(format!("Sync plan for {}", machine))
            .bold()
            .render(supports_color)
    );
    out.push_str(&format!(
        "Plan: {}, {}, {}, {}\n\n",
        ColoredText::success(format!("{} to add", plan.to_add.len())).render(supports_color),
        ColoredText::warning(format!("{} to update", plan.to_update.len()))
            .render(supports_color),
        ColoredText::error(format!("{} to remove", plan.to_remove.len())).render(supports_color),
        ColoredText::dim(format!("{} unchanged", plan.to_keep.len())).render(supports_color),
    ));

    let marked = [
        (Icon::Add, &plan.to_add),
        (Icon::Update, &plan.to_update),
        (Icon::Remove, &plan.to_remove),
    ];
    for (icon, units) in marked {
        for unit in units {
            out.push_str(&format!(
                "  {} {}\n",
                icon.colored(supports_color, supports_unicode),
                unit
            ));
        }
    }
    for unit in &plan.to_keep {
        out.push_str(&format!(
            "    {}\n",
            ColoredText::dim(unit.as_str()).render(supports_color)
        ));
    }
    out
}
