//! Content-based drift detection

use serde::Serialize;

use crate::domain::entities::Unit;
use crate::domain::ports::{RemoteResult, ServiceManager};

/// Why a unit must be re-uploaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FileDrift {
    /// Local file has no remote counterpart
    Missing { filename: String },
    /// Remote content differs
    Changed { filename: String },
}

impl FileDrift {
    pub fn filename(&self) -> &str {
        match self {
            FileDrift::Missing { filename } | FileDrift::Changed { filename } => filename,
        }
    }
}

pub struct DriftDetector<'a, M: ServiceManager + ?Sized> {
    manager: &'a M,
}

impl<'a, M: ServiceManager + ?Sized> DriftDetector<'a, M> {
    pub fn new(manager: &'a M) -> Self {
        Self { manager }
    }

    /// First local file whose remote copy is missing or different.
    ///
    /// Stops at the first drifted file. Extra remote files are not drift.
    pub fn detect(&self, unit: &Unit) -> RemoteResult<Option<FileDrift>> {
        for file in unit.files() {
            let filename = file.filename().to_string();
            match self.manager.file_hash(file.filename())? {
                None => return Ok(Some(FileDrift::Missing { filename })),
                Some(remote) if &remote != file.hash() => {
                    return Ok(Some(FileDrift::Changed { filename }))
                }
                Some(_) => {}
            }
        }
        Ok(None)
    }
}
