//! OpenSSH session
//!
//! One control master per host. Commands and scp transfers are
//! multiplexed over its socket, and dropping the session shuts it down.

use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

use crate::domain::ports::{
    CommandOutput, FileTransfer, HostTarget, RemoteError, RemoteResult, RemoteShell,
};

const CONNECT_TIMEOUT_SECS: u32 = 30;

/// ssh reserves this exit status for its own errors
const SSH_ERROR_EXIT: i32 = 255;

pub struct SshSession {
    target: HostTarget,
    destination: String,
    control_dir: TempDir,
}

impl SshSession {
    /// Start a control master for `target`.
    ///
    /// Authentication must be non-interactive (agent or key file).
    pub fn connect(target: &HostTarget) -> RemoteResult<Self> {
        let control_dir = tempfile::Builder::new()
            .prefix("homelab-ssh-")
            .tempdir()
            .map_err(|e| RemoteError::Connection(format!("control directory: {}", e)))?;

        let session = Self {
            target: target.clone(),
            destination: target.destination(),
            control_dir,
        };

        let log_path = session.control_dir.path().join("master.log");
        let log = File::create(&log_path)
            .map_err(|e| RemoteError::Connection(format!("master log: {}", e)))?;

        log::debug!("starting ssh control master for {}", session.destination);
        let status = Command::new("ssh")
            .args(["-M", "-N", "-f"])
            .args(session.common_options())
            .args(session.port_args("-p"))
            .arg(&session.destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::from(log))
            .status()
            .map_err(|e| RemoteError::Connection(format!("failed to spawn ssh: {}", e)))?;

        if !status.success() {
            let detail = std::fs::read_to_string(&log_path).unwrap_or_default();
            let detail = detail.trim();
            return Err(RemoteError::Connection(if detail.is_empty() {
                format!("ssh exited with {}", status)
            } else {
                detail.to_string()
            }));
        }

        Ok(session)
    }

    fn control_path(&self) -> PathBuf {
        self.control_dir.path().join("ctl")
    }

    fn common_options(&self) -> Vec<OsString> {
        let mut control = OsString::from("ControlPath=");
        control.push(self.control_path());
        vec![
            "-o".into(),
            control,
            "-o".into(),
            "BatchMode=yes".into(),
            "-o".into(),
            format!("ConnectTimeout={}", CONNECT_TIMEOUT_SECS).into(),
        ]
    }

    fn port_args(&self, flag: &str) -> Vec<String> {
        match self.target.port {
            Some(port) => vec![flag.to_string(), port.to_string()],
            None => Vec::new(),
        }
    }
}

impl RemoteShell for SshSession {
    fn host(&self) -> &str {
        &self.target.hostname
    }

    fn run(&self, command: &str) -> RemoteResult<CommandOutput> {
        let output = Command::new("ssh")
            .args(self.common_options())
            .args(self.port_args("-p"))
            .arg(&self.destination)
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RemoteError::Connection(format!("failed to spawn ssh: {}", e)))?;

        let out = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code().unwrap_or(-1),
        };

        log::debug!("[{}] {} -> {}", self.target.hostname, command, out.code);
        log::trace!("[{}] stdout: {}", self.target.hostname, out.stdout.trim_end());
        log::trace!("[{}] stderr: {}", self.target.hostname, out.stderr.trim_end());

        if out.code == SSH_ERROR_EXIT {
            return Err(RemoteError::Connection(out.stderr.trim().to_string()));
        }
        Ok(out)
    }

    fn upload_many(&self, files: &[FileTransfer]) -> RemoteResult<()> {
        for file in files {
            let remote = format!("{}:{}", self.destination, file.remote);
            log::debug!(
                "[{}] scp {} -> {}",
                self.target.hostname,
                file.local.display(),
                file.remote
            );

            let output = Command::new("scp")
                .arg("-q")
                .args(self.common_options())
                .args(self.port_args("-P"))
                .arg(&file.local)
                .arg(&remote)
                .stdin(Stdio::null())
                .output()
                .map_err(|e| RemoteError::Transfer(format!("failed to spawn scp: {}", e)))?;

            if !output.status.success() {
                return Err(RemoteError::Transfer(format!(
                    "{}: {}",
                    file.local.display(),
                    String::from_utf8_lossy(&output.stderr).trim()
                )));
            }
        }
        Ok(())
    }
}

impl Drop for SshSession {
    fn drop(&mut self) {
        log::debug!("closing ssh control master for {}", self.destination);
        let _ = Command::new("ssh")
            .args(self.common_options())
            .args(["-O", "exit"])
            .arg(&self.destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}
