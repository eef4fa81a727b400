//! Remote shell port
//!
//! One authenticated session to a host: run a command, copy files in.
//! A session is opened at most once per host per run and released when
//! dropped.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for remote operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote operation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Session could not be established or was lost
    #[error("connection failed: {0}")]
    Connection(String),

    /// Command ran but exited non-zero
    #[error("command `{command}` exited with {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// File copy failed
    #[error("transfer failed: {0}")]
    Transfer(String),
}

/// Captured output of one remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Turn a non-zero exit into `RemoteError::CommandFailed`
    pub fn into_result(self, command: &str) -> RemoteResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(RemoteError::CommandFailed {
                command: command.to_string(),
                code: self.code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }

    /// Non-empty trimmed stdout lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// A local file and its destination on the host.
///
/// `remote` is relative to the login user's home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransfer {
    pub local: PathBuf,
    pub remote: String,
}

/// Where to connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTarget {
    pub hostname: String,
    pub user: String,
    pub port: Option<u16>,
}

impl HostTarget {
    /// `user@hostname`
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.hostname)
    }
}

/// Command execution and file upload on one host
pub trait RemoteShell {
    /// Display name of the host
    fn host(&self) -> &str;

    /// Run a shell command. A non-zero exit is reported in the output, not as an error.
    fn run(&self, command: &str) -> RemoteResult<CommandOutput>;

    /// Copy files to the host
    fn upload_many(&self, files: &[FileTransfer]) -> RemoteResult<()>;
}
