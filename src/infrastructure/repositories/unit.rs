//! File System Unit Repository
//!
//! Reads Quadlet files from `<root>/services/<name>/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::UnitFile;
use crate::domain::ports::UnitRepository;
use crate::domain::value_objects::{ContentHash, UnitKind};
use crate::error::{HomelabError, HomelabResult};

pub struct FsUnitRepository {
    services_dir: PathBuf,
}

impl FsUnitRepository {
    pub fn new(services_dir: impl Into<PathBuf>) -> Self {
        Self {
            services_dir: services_dir.into(),
        }
    }

    pub fn services_dir(&self) -> &Path {
        &self.services_dir
    }

    fn unit_dir(&self, name: &str) -> PathBuf {
        self.services_dir.join(name)
    }
}

impl UnitRepository for FsUnitRepository {
    fn location(&self, name: &str) -> PathBuf {
        self.unit_dir(name)
    }

    fn exists(&self, name: &str) -> bool {
        fs::metadata(self.unit_dir(name))
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    fn files(&self, name: &str) -> HomelabResult<Vec<UnitFile>> {
        let dir = self.unit_dir(name);
        let entries = fs::read_dir(&dir).map_err(|_| HomelabError::ServiceNotFound {
            name: name.to_string(),
            dir: dir.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(kind) = UnitKind::from_path(&path) else {
                continue;
            };
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let content = fs::read(&path)?;
            files.push(UnitFile::new(
                filename,
                kind,
                path.clone(),
                ContentHash::from_bytes(&content),
            ));
        }
        Ok(files)
    }
}
