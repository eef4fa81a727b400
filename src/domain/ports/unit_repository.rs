//! UnitRepository port - read-only access to local unit definitions

use std::path::PathBuf;

use crate::domain::entities::{Unit, UnitFile, Validation};
use crate::error::HomelabResult;

/// Local source of unit definition files.
///
/// Implemented by `FsUnitRepository` over `<root>/services/<name>/`.
pub trait UnitRepository {
    /// Where the unit's definitions are expected
    fn location(&self, name: &str) -> PathBuf;

    /// Whether a unit directory exists
    fn exists(&self, name: &str) -> bool;

    /// Recognized definition files of a unit, with content digests.
    ///
    /// Errors with `ServiceNotFound` when the unit directory is missing.
    fn files(&self, name: &str) -> HomelabResult<Vec<UnitFile>>;

    fn load(&self, name: &str) -> HomelabResult<Unit> {
        Ok(Unit::new(name, self.files(name)?))
    }

    fn validate(&self, name: &str) -> HomelabResult<Validation> {
        Ok(self.load(name)?.validate())
    }

    fn primary_name(&self, name: &str) -> HomelabResult<String> {
        Ok(self.load(name)?.primary_name().to_string())
    }

    /// Supervisor service that represents the unit
    fn primary_service(&self, name: &str) -> HomelabResult<String> {
        Ok(self.load(name)?.primary_service())
    }
}
