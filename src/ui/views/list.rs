use homelab::config::MachinesConfig;

use crate::ui::primitives::text::ColoredText;

pub fn render_machine_list(config: &MachinesConfig, supports_color: bool) -> String {
    if config.machines.is_empty() {
        return "No machines configured\n".to_string();
    }

    let mut out = String::new();
    for (name, machine) in config.machines() {
        out.push_str(&format!(
            "{} {}\n",
            ColoredText::info(name).bold().render(supports_color),
            ColoredText::dim(machine.target().destination()).render(supports_color)
        ));
        if let Some(description) = &machine.description {
            out.push_str(&format!("  {}\n", description));
        }
        let services = if machine.services.is_empty() {
            "(none)".to_string()
        } else {
            machine.services.join(", ")
        };
        out.push_str(&format!("  services: {}\n", services));
    }
    out
}
