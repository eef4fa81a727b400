//! Remote unit file entity

use crate::domain::value_objects::{base_name, parse_service_name, UnitKind};

/// A definition file observed in the remote unit directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUnitFile {
    pub filename: String,
    pub kind: UnitKind,
    /// Owning unit, derived from the filename
    pub service_name: String,
}

impl RemoteUnitFile {
    /// Parse a listed path or filename. Unrecognized extensions yield `None`.
    pub fn parse(listed: &str) -> Option<Self> {
        let filename = listed.trim().rsplit('/').next()?.to_string();
        if filename.is_empty() {
            return None;
        }
        let kind = UnitKind::from_path(std::path::Path::new(&filename))?;
        let service_name = parse_service_name(&filename).to_string();
        Some(Self {
            filename,
            kind,
            service_name,
        })
    }

    /// Systemd service generated for this file
    pub fn generated_service(&self) -> String {
        self.kind.generated_service(base_name(&self.filename))
    }
}
