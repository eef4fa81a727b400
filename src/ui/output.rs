use std::path::Path;

use homelab::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], unicode: bool) {
    for w in warnings {
        eprintln!("{} {} in {}", Icon::Warning.render(unicode), w, path.display());
    }
}
