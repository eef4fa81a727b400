//! systemd user-instance supervisor for Podman Quadlets
//!
//! Quadlet files live in `~/.config/containers/systemd/`; the generator
//! turns each into a `.service` unit after `daemon-reload`.

use crate::domain::entities::{ContainerInfo, ContainerMetrics, UnitFile};
use crate::domain::ports::{FileTransfer, RemoteResult, RemoteShell, ServiceManager};
use crate::domain::value_objects::{ContentHash, UnitKind};
use crate::infrastructure::ssh::{quote, quote_path};

/// Unit directory relative to the login user's home
pub const UNIT_DIR: &str = ".config/containers/systemd";

pub struct SystemdSupervisor<S: RemoteShell> {
    shell: S,
}

impl<S: RemoteShell> SystemdSupervisor<S> {
    pub fn new(shell: S) -> Self {
        Self { shell }
    }

    fn unit_path(filename: &str) -> String {
        format!("~/{}/{}", UNIT_DIR, filename)
    }

    fn systemctl(&self, verb: &str, service: &str) -> RemoteResult<()> {
        let command = format!("systemctl --user {} {}", verb, quote(&service_unit(service)));
        self.shell.run(&command)?.into_result(&command)?;
        Ok(())
    }

    fn systemctl_query(&self, verb: &str, service: &str, expected: &str) -> RemoteResult<bool> {
        let command = format!("systemctl --user {} {}", verb, quote(&service_unit(service)));
        let out = self.shell.run(&command)?;
        Ok(out.stdout.trim() == expected)
    }
}

fn service_unit(service: &str) -> String {
    format!("{}.service", service)
}

impl<S: RemoteShell> ServiceManager for SystemdSupervisor<S> {
    fn host(&self) -> &str {
        self.shell.host()
    }

    fn list_unit_files(&self, kind: UnitKind) -> RemoteResult<Vec<String>> {
        let command = format!(
            "ls -1 {}/*.{} 2>/dev/null || true",
            quote_path(&format!("~/{}", UNIT_DIR)),
            kind.extension()
        );
        let out = self.shell.run(&command)?.into_result(&command)?;
        Ok(out
            .lines()
            .filter_map(|line| line.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn file_hash(&self, filename: &str) -> RemoteResult<Option<ContentHash>> {
        let command = format!(
            "sha256sum {} 2>/dev/null || true",
            quote_path(&Self::unit_path(filename))
        );
        let out = self.shell.run(&command)?.into_result(&command)?;
        Ok(ContentHash::from_sha256sum(&out.stdout))
    }

    fn ensure_unit_dir(&self) -> RemoteResult<()> {
        let command = format!("mkdir -p {}", quote_path(&format!("~/{}", UNIT_DIR)));
        self.shell.run(&command)?.into_result(&command)?;
        Ok(())
    }

    fn upload_files(&self, files: &[UnitFile]) -> RemoteResult<()> {
        let transfers: Vec<FileTransfer> = files
            .iter()
            .map(|f| FileTransfer {
                local: f.path().to_path_buf(),
                remote: format!("{}/{}", UNIT_DIR, f.filename()),
            })
            .collect();
        self.shell.upload_many(&transfers)
    }

    fn remove_unit_file(&self, filename: &str) -> RemoteResult<()> {
        let command = format!("rm -f {}", quote_path(&Self::unit_path(filename)));
        self.shell.run(&command)?.into_result(&command)?;
        Ok(())
    }

    fn reload_daemon(&self) -> RemoteResult<()> {
        let command = "systemctl --user daemon-reload";
        self.shell.run(command)?.into_result(command)?;
        Ok(())
    }

    fn start(&self, service: &str) -> RemoteResult<()> {
        self.systemctl("start", service)
    }

    fn stop(&self, service: &str) -> RemoteResult<()> {
        self.systemctl("stop", service)
    }

    fn is_active(&self, service: &str) -> RemoteResult<bool> {
        self.systemctl_query("is-active", service, "active")
    }

    fn is_enabled(&self, service: &str) -> RemoteResult<bool> {
        self.systemctl_query("is-enabled", service, "enabled")
    }

    fn is_failed(&self, service: &str) -> RemoteResult<bool> {
        self.systemctl_query("is-failed", service, "failed")
    }

    fn containers(&self, service: &str) -> RemoteResult<Vec<ContainerInfo>> {
        let command = format!(
            "podman ps --filter {} --format '{{{{.Names}}}} {{{{.Status}}}}'",
            quote(&format!("name={}", service))
        );
        let out = self.shell.run(&command)?.into_result(&command)?;
        Ok(out.lines().filter_map(ContainerInfo::parse_ps_line).collect())
    }

    fn container_metrics(
        &self,
        containers: &[ContainerInfo],
    ) -> RemoteResult<Vec<ContainerMetrics>> {
        if containers.is_empty() {
            return Ok(Vec::new());
        }
        let sep = ContainerMetrics::SEPARATOR;
        let format = format!(
            "{{{{.Name}}}}{sep}{{{{.CPUPerc}}}}{sep}{{{{.MemUsage}}}}{sep}{{{{.NetIO}}}}"
        );
        let names: Vec<String> = containers.iter().map(|c| quote(&c.name)).collect();
        let command = format!(
            "podman stats --no-stream --format {} {}",
            quote(&format),
            names.join(" ")
        );
        let out = self.shell.run(&command)?.into_result(&command)?;
        Ok(out
            .lines()
            .filter_map(ContainerMetrics::parse_stats_line)
            .collect())
    }
}
