//! Project layout and path resolution
//!
//! Priority for the root: `--root` flag, `HOMELAB_ROOT`, current directory.
//! Priority for the machines file: `--config` flag, `HOMELAB_CONFIG`,
//! `<root>/machines/machines.yaml`, `<user config dir>/homelab/machines.yaml`.

use std::path::{Path, PathBuf};

pub const ROOT_ENV: &str = "HOMELAB_ROOT";
pub const CONFIG_ENV: &str = "HOMELAB_CONFIG";

/// Directories of a homelab project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
    machines_file: PathBuf,
}

impl ProjectPaths {
    /// Paths rooted at `root` with the default machines file location
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let machines_file = root.join("machines").join("machines.yaml");
        Self {
            root,
            machines_file,
        }
    }

    /// Resolve from CLI flags and the environment
    pub fn resolve(root_flag: Option<&Path>, config_flag: Option<&Path>) -> Self {
        let env_root = std::env::var_os(ROOT_ENV).map(PathBuf::from);
        let env_config = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let user_config = dirs::config_dir().map(|d| d.join("homelab").join("machines.yaml"));

        Self::resolve_from(
            root_flag.map(Path::to_path_buf).or(env_root).unwrap_or(cwd),
            config_flag.map(Path::to_path_buf).or(env_config),
            user_config,
        )
    }

    fn resolve_from(
        root: PathBuf,
        explicit_config: Option<PathBuf>,
        user_config: Option<PathBuf>,
    ) -> Self {
        let mut paths = Self::new(root);
        if let Some(config) = explicit_config {
            paths.machines_file = config;
        } else if !paths.machines_file.exists() {
            if let Some(user) = user_config.filter(|p| p.exists()) {
                paths.machines_file = user;
            }
        }
        paths
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn machines_file(&self) -> &Path {
        &self.machines_file
    }

    pub fn services_dir(&self) -> PathBuf {
        self.root.join("services")
    }

    pub fn service_dir(&self, name: &str) -> PathBuf {
        self.services_dir().join(name)
    }
}
