//! Unit entity
//!
//! A named, deployable group of Quadlet definition files read from the local
//! services directory.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{base_name, ContentHash, UnitKind};

/// One local definition file belonging to a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFile {
    filename: String,
    kind: UnitKind,
    path: PathBuf,
    hash: ContentHash,
}

impl UnitFile {
    pub fn new(
        filename: impl Into<String>,
        kind: UnitKind,
        path: impl Into<PathBuf>,
        hash: ContentHash,
    ) -> Self {
        Self {
            filename: filename.into(),
            kind,
            path: path.into(),
            hash,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Local path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Filename without extension
    pub fn base_name(&self) -> &str {
        base_name(&self.filename)
    }
}

/// Outcome of the pre-flight unit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { reason: String },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid { reason } => Some(reason),
        }
    }
}

/// A unit and its files, in directory listing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    name: String,
    files: Vec<UnitFile>,
}

impl Unit {
    pub fn new(name: impl Into<String>, files: Vec<UnitFile>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[UnitFile] {
        &self.files
    }

    pub fn primary_files(&self) -> impl Iterator<Item = &UnitFile> {
        self.files.iter().filter(|f| f.kind().is_primary())
    }

    /// A unit is valid iff it has at least one file and at least one primary file
    pub fn validate(&self) -> Validation {
        if self.files.is_empty() {
            return Validation::Invalid {
                reason: format!("No quadlet files found in services/{}/", self.name),
            };
        }
        if self.primary_files().next().is_none() {
            return Validation::Invalid {
                reason: "Service must have at least one .container, .pod, or .kube file"
                    .to_string(),
            };
        }
        Validation::Valid
    }

    /// The primary file that represents the unit.
    ///
    /// Prefers a primary file named exactly like the unit, then the first
    /// primary file in listing order.
    pub fn primary_file(&self) -> Option<&UnitFile> {
        self.primary_files()
            .find(|f| f.base_name() == self.name)
            .or_else(|| self.primary_files().next())
    }

    /// Base name of the primary file, or the unit name when there is none
    pub fn primary_name(&self) -> &str {
        self.primary_file()
            .map(|f| f.base_name())
            .unwrap_or(self.name.as_str())
    }

    /// Supervisor service started and stopped for this unit.
    ///
    /// Quadlet names the service after the primary file, with a kind
    /// suffix for pods (`media.pod` runs as `media-pod`).
    pub fn primary_service(&self) -> String {
        match self.primary_file() {
            Some(file) => file.kind().generated_service(file.base_name()),
            None => self.name.clone(),
        }
    }
}
