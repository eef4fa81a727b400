//! Service supervisor port
//!
//! Everything the sync engine needs from a host: the unit directory and
//! the per-user service supervisor. Implementations:
//! - `SystemdSupervisor` - systemd user instance driven over a `RemoteShell`
//! - test doubles in `tests/common`

use crate::domain::entities::{ContainerInfo, ContainerMetrics, ServiceStatus, UnitFile};
use crate::domain::ports::remote_shell::{HostTarget, RemoteResult};
use crate::domain::value_objects::{ContentHash, UnitKind};

pub trait ServiceManager {
    /// Host this manager talks to
    fn host(&self) -> &str;

    /// Filenames of the given kind in the unit directory. Empty when none match.
    fn list_unit_files(&self, kind: UnitKind) -> RemoteResult<Vec<String>>;

    /// Digest of a file in the unit directory, `None` if it is absent
    fn file_hash(&self, filename: &str) -> RemoteResult<Option<ContentHash>>;

    /// Create the unit directory if missing
    fn ensure_unit_dir(&self) -> RemoteResult<()>;

    /// Copy a unit's files into the unit directory
    fn upload_files(&self, files: &[UnitFile]) -> RemoteResult<()>;

    /// Remove one file from the unit directory. Absent files are not an error.
    fn remove_unit_file(&self, filename: &str) -> RemoteResult<()>;

    /// Re-read unit definitions
    fn reload_daemon(&self) -> RemoteResult<()>;

    fn start(&self, service: &str) -> RemoteResult<()>;

    fn stop(&self, service: &str) -> RemoteResult<()>;

    fn is_active(&self, service: &str) -> RemoteResult<bool>;

    fn is_enabled(&self, service: &str) -> RemoteResult<bool>;

    fn is_failed(&self, service: &str) -> RemoteResult<bool>;

    /// Containers whose name contains `service`
    fn containers(&self, service: &str) -> RemoteResult<Vec<ContainerInfo>>;

    /// One-shot CPU, memory and network usage of the given containers
    fn container_metrics(&self, containers: &[ContainerInfo])
        -> RemoteResult<Vec<ContainerMetrics>>;

    /// Combined supervisor state of a service
    fn service_status(&self, service: &str) -> RemoteResult<ServiceStatus> {
        let active = self.is_active(service)?;
        let containers = if active {
            self.containers(service)?
        } else {
            Vec::new()
        };
        Ok(ServiceStatus {
            name: service.to_string(),
            active,
            enabled: self.is_enabled(service)?,
            failed: self.is_failed(service)?,
            containers,
        })
    }
}

impl<T: ServiceManager + ?Sized> ServiceManager for Box<T> {
    fn host(&self) -> &str {
        (**self).host()
    }
    fn list_unit_files(&self, kind: UnitKind) -> RemoteResult<Vec<String>> {
        (**self).list_unit_files(kind)
    }
    fn file_hash(&self, filename: &str) -> RemoteResult<Option<ContentHash>> {
        (**self).file_hash(filename)
    }
    fn ensure_unit_dir(&self) -> RemoteResult<()> {
        (**self).ensure_unit_dir()
    }
    fn upload_files(&self, files: &[UnitFile]) -> RemoteResult<()> {
        (**self).upload_files(files)
    }
    fn remove_unit_file(&self, filename: &str) -> RemoteResult<()> {
        (**self).remove_unit_file(filename)
    }
    fn reload_daemon(&self) -> RemoteResult<()> {
        (**self).reload_daemon()
    }
    fn start(&self, service: &str) -> RemoteResult<()> {
        (**self).start(service)
    }
    fn stop(&self, service: &str) -> RemoteResult<()> {
        (**self).stop(service)
    }
    fn is_active(&self, service: &str) -> RemoteResult<bool> {
        (**self).is_active(service)
    }
    fn is_enabled(&self, service: &str) -> RemoteResult<bool> {
        (**self).is_enabled(service)
    }
    fn is_failed(&self, service: &str) -> RemoteResult<bool> {
        (**self).is_failed(service)
    }
    fn containers(&self, service: &str) -> RemoteResult<Vec<ContainerInfo>> {
        (**self).containers(service)
    }
    fn container_metrics(
        &self,
        containers: &[ContainerInfo],
    ) -> RemoteResult<Vec<ContainerMetrics>> {
        (**self).container_metrics(containers)
    }
    fn service_status(&self, service: &str) -> RemoteResult<ServiceStatus> {
        (**self).service_status(service)
    }
}

/// Opens a session to a host and hands back its supervisor.
///
/// Dropping the returned manager releases the session.
pub trait HostConnector {
    fn connect(&self, target: &HostTarget) -> RemoteResult<Box<dyn ServiceManager>>;
}
