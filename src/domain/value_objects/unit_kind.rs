//! Unit kind value object - the recognized Quadlet definition types

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Kind of a Quadlet definition file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Container,
    Network,
    Volume,
    Pod,
    Kube,
    Build,
    Image,
}

impl UnitKind {
    /// Every recognized kind, in the order the remote directory is listed
    pub const ALL: [UnitKind; 7] = [
        UnitKind::Container,
        UnitKind::Network,
        UnitKind::Volume,
        UnitKind::Pod,
        UnitKind::Kube,
        UnitKind::Build,
        UnitKind::Image,
    ];

    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            UnitKind::Container => "container",
            UnitKind::Network => "network",
            UnitKind::Volume => "volume",
            UnitKind::Pod => "pod",
            UnitKind::Kube => "kube",
            UnitKind::Build => "build",
            UnitKind::Image => "image",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.extension() == ext)
    }

    /// Kind of a file by its extension, `None` when not on the allow-list
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Primary kinds are started and stopped as the unit's representative process
    pub fn is_primary(&self) -> bool {
        matches!(self, UnitKind::Container | UnitKind::Pod | UnitKind::Kube)
    }

    /// Name of the systemd service the Quadlet generator emits for `base`
    pub fn generated_service(&self, base: &str) -> String {
        match self {
            UnitKind::Container | UnitKind::Kube => base.to_string(),
            other => format!("{}-{}", base, other.extension()),
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
