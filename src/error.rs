//! Error types for homelab
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RemoteError;

/// Result type alias for homelab operations
pub type HomelabResult<T> = Result<T, HomelabError>;

/// Main error type for homelab operations
#[derive(Error, Debug)]
pub enum HomelabError {
    /// Machines file does not exist
    #[error("machines file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Machines file is malformed or fails validation
    #[error("invalid machines file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Requested machine is not configured
    #[error("machine '{name}' not found (available: {})", available.join(", "))]
    MachineNotFound {
        name: String,
        available: Vec<String>,
    },

    /// No local directory for the unit
    #[error("service '{name}' not found in {dir}")]
    ServiceNotFound { name: String, dir: PathBuf },

    /// Unit directory exists but cannot be deployed
    #[error("invalid service '{name}': {reason}")]
    InvalidService { name: String, reason: String },

    /// Session to the host could not be opened
    #[error("cannot connect to {host}: {source}")]
    Connection {
        host: String,
        #[source]
        source: RemoteError,
    },

    /// Remote query or operation failed for the whole host
    #[error("remote operation on {host} failed: {source}")]
    Remote {
        host: String,
        #[source]
        source: RemoteError,
    },

    /// Supervisor could not reload unit definitions
    #[error("daemon reload on {host} failed: {source}")]
    DaemonReload {
        host: String,
        #[source]
        source: RemoteError,
    },

    /// Command-line arguments do not describe a runnable operation
    #[error("{0}")]
    Usage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl HomelabError {
    pub fn remote(host: &str, source: RemoteError) -> Self {
        HomelabError::Remote {
            host: host.to_string(),
            source,
        }
    }
}
