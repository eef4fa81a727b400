//! In-memory host for driving use cases without SSH

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::rc::Rc;

use homelab::domain::entities::{ContainerInfo, ContainerMetrics, UnitFile};
use homelab::domain::ports::{
    Approver, HostConnector, HostTarget, RemoteError, RemoteResult, ServiceManager,
};
use homelab::domain::services::SyncPlan;
use homelab::domain::value_objects::{ContentHash, UnitKind};

#[derive(Default)]
pub struct HostState {
    pub files: BTreeMap<String, ContentHash>,
    pub running: BTreeSet<String>,
    pub calls: Vec<String>,
    pub broken_services: HashSet<String>,
}

/// Unit directory plus supervisor, shared between test and use case
#[derive(Clone, Default)]
pub struct FakeHost(pub Rc<RefCell<HostState>>);

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deploy(&self, filename: &str, content: &str) -> &Self {
        self.0
            .borrow_mut()
            .files
            .insert(filename.to_string(), ContentHash::from_bytes(content.as_bytes()));
        self
    }

    pub fn run_service(&self, service: &str) -> &Self {
        self.0.borrow_mut().running.insert(service.to_string());
        self
    }

    /// Starting this service fails
    pub fn break_service(&self, service: &str) -> &Self {
        self.0
            .borrow_mut()
            .broken_services
            .insert(service.to_string());
        self
    }

    pub fn filenames(&self) -> Vec<String> {
        self.0.borrow().files.keys().cloned().collect()
    }

    pub fn is_running(&self, service: &str) -> bool {
        self.0.borrow().running.contains(service)
    }

    /// Calls that change the host
    pub fn mutations(&self) -> Vec<String> {
        const READS: &[&str] = &[
            "list",
            "hash",
            "is-active",
            "is-enabled",
            "is-failed",
            "ps",
            "stats",
        ];
        self.0
            .borrow()
            .calls
            .iter()
            .filter(|c| !READS.iter().any(|r| c.split(' ').next() == Some(r)))
            .cloned()
            .collect()
    }

    fn record(&self, call: impl Into<String>) {
        self.0.borrow_mut().calls.push(call.into());
    }
}

impl ServiceManager for FakeHost {
    fn host(&self) -> &str {
        "fake"
    }

    fn list_unit_files(&self, kind: UnitKind) -> RemoteResult<Vec<String>> {
        self.record(format!("list {}", kind.extension()));
        Ok(self
            .0
            .borrow()
            .files
            .keys()
            .filter(|f| UnitKind::from_extension(f.rsplit('.').next().unwrap_or("")) == Some(kind))
            .cloned()
            .collect())
    }

    fn file_hash(&self, filename: &str) -> RemoteResult<Option<ContentHash>> {
        self.record(format!("hash {}", filename));
        Ok(self.0.borrow().files.get(filename).cloned())
    }

    fn ensure_unit_dir(&self) -> RemoteResult<()> {
        self.record("mkdir");
        Ok(())
    }

    fn upload_files(&self, files: &[UnitFile]) -> RemoteResult<()> {
        for file in files {
            self.record(format!("upload {}", file.filename()));
            self.0
                .borrow_mut()
                .files
                .insert(file.filename().to_string(), file.hash().clone());
        }
        Ok(())
    }

    fn remove_unit_file(&self, filename: &str) -> RemoteResult<()> {
        self.record(format!("rm {}", filename));
        self.0.borrow_mut().files.remove(filename);
        Ok(())
    }

    fn reload_daemon(&self) -> RemoteResult<()> {
        self.record("daemon-reload");
        Ok(())
    }

    fn start(&self, service: &str) -> RemoteResult<()> {
        self.record(format!("start {}", service));
        if self.0.borrow().broken_services.contains(service) {
            return Err(RemoteError::CommandFailed {
                command: format!("systemctl --user start {}.service", service),
                code: 1,
                stderr: "Job for service failed because the control process exited".into(),
            });
        }
        self.0.borrow_mut().running.insert(service.to_string());
        Ok(())
    }

    fn stop(&self, service: &str) -> RemoteResult<()> {
        self.record(format!("stop {}", service));
        self.0.borrow_mut().running.remove(service);
        Ok(())
    }

    fn is_active(&self, service: &str) -> RemoteResult<bool> {
        self.record(format!("is-active {}", service));
        Ok(self.is_running(service))
    }

    fn is_enabled(&self, service: &str) -> RemoteResult<bool> {
        self.record(format!("is-enabled {}", service));
        Ok(false)
    }

    fn is_failed(&self, service: &str) -> RemoteResult<bool> {
        self.record(format!("is-failed {}", service));
        Ok(false)
    }

    fn containers(&self, service: &str) -> RemoteResult<Vec<ContainerInfo>> {
        self.record(format!("ps {}", service));
        Ok(Vec::new())
    }

    fn container_metrics(
        &self,
        containers: &[ContainerInfo],
    ) -> RemoteResult<Vec<ContainerMetrics>> {
        self.record(format!("stats {}", containers.len()));
        Ok(Vec::new())
    }
}

/// Hands out the same fake host for every hostname
pub struct FakeConnector {
    pub host: FakeHost,
    pub reachable: bool,
}

impl FakeConnector {
    pub fn new(host: &FakeHost) -> Self {
        Self {
            host: host.clone(),
            reachable: true,
        }
    }
}

impl HostConnector for FakeConnector {
    fn connect(&self, target: &HostTarget) -> RemoteResult<Box<dyn ServiceManager>> {
        if !self.reachable {
            return Err(RemoteError::Connection(format!(
                "ssh: connect to host {} port 22: Connection refused",
                target.hostname
            )));
        }
        Ok(Box::new(self.host.clone()))
    }
}

/// Answers with a fixed decision and counts the questions
pub struct CountingApprover {
    pub answer: bool,
    pub asked: Rc<Cell<usize>>,
}

impl CountingApprover {
    pub fn new(answer: bool) -> (Self, Rc<Cell<usize>>) {
        let asked = Rc::new(Cell::new(0));
        (
            Self {
                answer,
                asked: asked.clone(),
            },
            asked,
        )
    }
}

impl Approver for CountingApprover {
    fn approve(&self, _machine: &str, _plan: &SyncPlan) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}
