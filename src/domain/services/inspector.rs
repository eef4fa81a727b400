//! Remote state inspection
//!
//! Groups the files in the remote unit directory into deployed units.

use std::collections::BTreeSet;

use crate::domain::entities::RemoteUnitFile;
use crate::domain::ports::{RemoteResult, ServiceManager};
use crate::domain::value_objects::UnitKind;

pub struct RemoteInspector<'a, M: ServiceManager + ?Sized> {
    manager: &'a M,
}

impl<'a, M: ServiceManager + ?Sized> RemoteInspector<'a, M> {
    pub fn new(manager: &'a M) -> Self {
        Self { manager }
    }

    /// Every recognized file in the unit directory, one listing per kind
    pub fn remote_files(&self) -> RemoteResult<Vec<RemoteUnitFile>> {
        let mut files = Vec::new();
        for kind in UnitKind::ALL {
            for listed in self.manager.list_unit_files(kind)? {
                if let Some(file) = RemoteUnitFile::parse(&listed) {
                    files.push(file);
                }
            }
        }
        Ok(files)
    }

    /// Sorted, de-duplicated names of deployed units
    pub fn deployed_units(&self) -> RemoteResult<Vec<String>> {
        let names: BTreeSet<String> = self
            .remote_files()?
            .into_iter()
            .map(|f| f.service_name)
            .collect();
        Ok(names.into_iter().collect())
    }
}
