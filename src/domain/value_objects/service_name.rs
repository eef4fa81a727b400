//! Service name derivation
//!
//! Remote hosts carry no manifest. A remote definition file belongs to the
//! unit named by the first `-`-separated segment of its base filename, so
//! `pinepods-db.container` and `pinepods-pgdata.volume` both group under
//! `pinepods`. Grouping must be reproducible run to run, so this stays a pure
//! function of the filename.

use std::path::Path;

/// Separator between the unit name and a sidecar suffix
pub const NAME_SEPARATOR: char = '-';

/// File stem without directory or extension
pub fn base_name(filename: &str) -> &str {
    let file = Path::new(filename)
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(filename);
    match file.rfind('.') {
        Some(0) | None => file,
        Some(idx) => &file[..idx],
    }
}

/// Derive the owning unit name from a definition filename
pub fn parse_service_name(filename: &str) -> &str {
    let base = base_name(filename);
    base.split(NAME_SEPARATOR).next().unwrap_or(base)
}

/// Whether `name` names exactly one directory under `services/`
pub fn is_unit_dir_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}
