//! Temporary project layout and CLI runner

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Result of running the homelab binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Project root with `machines/machines.yaml` and `services/<name>/`
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp project root");
        fs::create_dir_all(root.path().join("machines")).unwrap();
        fs::create_dir_all(root.path().join("services")).unwrap();
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn with_machines(self, yaml: &str) -> Self {
        fs::write(self.path().join("machines").join("machines.yaml"), yaml).unwrap();
        self
    }

    pub fn with_unit_file(self, service: &str, filename: &str, content: &str) -> Self {
        let dir = self.path().join("services").join(service);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(filename), content).unwrap();
        self
    }

    pub fn services_dir(&self) -> std::path::PathBuf {
        self.path().join("services")
    }

    /// Run the binary against this project with a clean environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_homelab"))
            .arg("--root")
            .arg(self.path())
            .args(args)
            .env_remove("HOMELAB_ROOT")
            .env_remove("HOMELAB_CONFIG")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env("NO_COLOR", "1")
            .output()
            .expect("run homelab binary");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
