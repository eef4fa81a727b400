//! Test doubles shared by the use case tests

use crate::config::{MachineConfig, MachinesConfig};
use crate::domain::entities::{ContainerInfo, ContainerMetrics, UnitFile};
use crate::domain::ports::{
    HostConnector, HostTarget, RemoteError, RemoteResult, ServiceManager, UnitRepository,
};
use crate::domain::value_objects::{ContentHash, UnitKind};
use crate::error::{HomelabError, HomelabResult};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Default)]
pub struct HostState {
    pub files: BTreeMap<String, ContentHash>,
    pub active: BTreeSet<String>,
    pub failed: BTreeSet<String>,
    pub calls: Vec<String>,
    pub fail_start: HashSet<String>,
    pub fail_stop: HashSet<String>,
    pub fail_upload: HashSet<String>,
    pub fail_rm: HashSet<String>,
    pub fail_mkdir: bool,
    pub fail_reload: bool,
}

#[derive(Clone, Default)]
pub struct MockHost(pub Rc<RefCell<HostState>>);

impl MockHost {
    pub fn with_file(self, filename: &str, content: &str) -> Self {
        self.0
            .borrow_mut()
            .files
            .insert(filename.to_string(), ContentHash::from_bytes(content.as_bytes()));
        self
    }

    pub fn with_active(self, service: &str) -> Self {
        self.0.borrow_mut().active.insert(service.to_string());
        self
    }

    pub fn with_failed(self, service: &str) -> Self {
        self.0.borrow_mut().failed.insert(service.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.borrow().calls.clone()
    }

    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| {
                !c.starts_with("ls ") && !c.starts_with("hash ") && !c.starts_with("is-active ")
            })
            .collect()
    }

    fn log(&self, call: String) {
        self.0.borrow_mut().calls.push(call);
    }
}

impl ServiceManager for MockHost {
    fn host(&self) -> &str {
        "mock.lan"
    }

    fn list_unit_files(&self, kind: UnitKind) -> RemoteResult<Vec<String>> {
        self.log(format!("ls {}", kind.extension()));
        let suffix = format!(".{}", kind.extension());
        Ok(self
            .0
            .borrow()
            .files
            .keys()
            .filter(|f| f.ends_with(&suffix))
            .cloned()
            .collect())
    }

    fn file_hash(&self, filename: &str) -> RemoteResult<Option<ContentHash>> {
        self.log(format!("hash {}", filename));
        Ok(self.0.borrow().files.get(filename).cloned())
    }

    fn ensure_unit_dir(&self) -> RemoteResult<()> {
        self.log("mkdir".to_string());
        if self.0.borrow().fail_mkdir {
            return Err(RemoteError::CommandFailed {
                command: "mkdir -p ~/.config/containers/systemd".into(),
                code: 1,
                stderr: "Permission denied".into(),
            });
        }
        Ok(())
    }

    fn upload_files(&self, files: &[UnitFile]) -> RemoteResult<()> {
        for file in files {
            if self.0.borrow().fail_upload.contains(file.filename()) {
                return Err(RemoteError::Transfer(format!("{}: disk full", file.filename())));
            }
            self.log(format!("upload {}", file.filename()));
            self.0
                .borrow_mut()
                .files
                .insert(file.filename().to_string(), file.hash().clone());
        }
        Ok(())
    }

    fn remove_unit_file(&self, filename: &str) -> RemoteResult<()> {
        self.log(format!("rm {}", filename));
        if self.0.borrow().fail_rm.contains(filename) {
            return Err(RemoteError::CommandFailed {
                command: format!("rm -f {}", filename),
                code: 1,
                stderr: "Read-only file system".into(),
            });
        }
        self.0.borrow_mut().files.remove(filename);
        Ok(())
    }

    fn reload_daemon(&self) -> RemoteResult<()> {
        self.log("reload".to_string());
        if self.0.borrow().fail_reload {
            return Err(RemoteError::CommandFailed {
                command: "systemctl --user daemon-reload".into(),
                code: 1,
                stderr: "Failed to connect to bus".into(),
            });
        }
        Ok(())
    }

    fn start(&self, service: &str) -> RemoteResult<()> {
        self.log(format!("start {}", service));
        if self.0.borrow().fail_start.contains(service) {
            return Err(RemoteError::CommandFailed {
                command: format!("systemctl --user start {}.service", service),
                code: 1,
                stderr: "Job failed".into(),
            });
        }
        self.0.borrow_mut().active.insert(service.to_string());
        Ok(())
    }

    fn stop(&self, service: &str) -> RemoteResult<()> {
        self.log(format!("stop {}", service));
        if self.0.borrow().fail_stop.contains(service) {
            return Err(RemoteError::CommandFailed {
                command: format!("systemctl --user stop {}.service", service),
                code: 1,
                stderr: "Unit not loaded".into(),
            });
        }
        self.0.borrow_mut().active.remove(service);
        Ok(())
    }

    fn is_active(&self, service: &str) -> RemoteResult<bool> {
        self.log(format!("is-active {}", service));
        Ok(self.0.borrow().active.contains(service))
    }

    fn is_enabled(&self, _service: &str) -> RemoteResult<bool> {
        Ok(false)
    }

    fn is_failed(&self, service: &str) -> RemoteResult<bool> {
        Ok(self.0.borrow().failed.contains(service))
    }

    fn containers(&self, service: &str) -> RemoteResult<Vec<ContainerInfo>> {
        Ok(vec![ContainerInfo {
            name: format!("systemd-{}", service),
            status: "Up 2 hours".to_string(),
        }])
    }

    fn container_metrics(
        &self,
        containers: &[ContainerInfo],
    ) -> RemoteResult<Vec<ContainerMetrics>> {
        self.log(format!("stats {}", containers.len()));
        Ok(containers
            .iter()
            .map(|c| ContainerMetrics {
                name: c.name.clone(),
                cpu: "0.50%".to_string(),
                memory: "64MB / 2GB".to_string(),
                network: "1kB / 2kB".to_string(),
            })
            .collect())
    }
}

#[derive(Default)]
pub struct MockConnector {
    pub hosts: HashMap<String, MockHost>,
    pub connects: RefCell<Vec<String>>,
}

impl MockConnector {
    pub fn single(host: &MockHost) -> Self {
        let mut hosts = HashMap::new();
        hosts.insert("nas.lan".to_string(), host.clone());
        Self {
            hosts,
            connects: RefCell::new(Vec::new()),
        }
    }
}

impl HostConnector for MockConnector {
    fn connect(&self, target: &HostTarget) -> RemoteResult<Box<dyn ServiceManager>> {
        self.connects.borrow_mut().push(target.hostname.clone());
        match self.hosts.get(&target.hostname) {
            Some(host) => Ok(Box::new(host.clone())),
            None => Err(RemoteError::Connection("no route to host".into())),
        }
    }
}

#[derive(Default)]
pub struct MockUnits {
    units: HashMap<String, Vec<UnitFile>>,
}

impl MockUnits {
    pub fn with(mut self, name: &str, files: &[(&str, &str)]) -> Self {
        let files = files
            .iter()
            .map(|(filename, content)| {
                let kind = UnitKind::from_path(Path::new(filename)).unwrap();
                UnitFile::new(
                    *filename,
                    kind,
                    PathBuf::from("services").join(name).join(filename),
                    ContentHash::from_bytes(content.as_bytes()),
                )
            })
            .collect();
        self.units.insert(name.to_string(), files);
        self
    }
}

impl UnitRepository for MockUnits {
    fn location(&self, name: &str) -> PathBuf {
        PathBuf::from("services").join(name)
    }

    fn exists(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    fn files(&self, name: &str) -> HomelabResult<Vec<UnitFile>> {
        self.units
            .get(name)
            .cloned()
            .ok_or_else(|| HomelabError::ServiceNotFound {
                name: name.to_string(),
                dir: self.location(name),
            })
    }
}

pub fn machines(list: &[(&str, &str, &[&str])]) -> MachinesConfig {
    let mut config = MachinesConfig::default();
    for (name, hostname, services) in list {
        config.machines.insert(
            name.to_string(),
            MachineConfig {
                hostname: hostname.to_string(),
                user: "ops".to_string(),
                services: services.iter().map(|s| s.to_string()).collect(),
                ..MachineConfig::default()
            },
        );
    }
    config
}
