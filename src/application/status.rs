//! Status Use Case
//!
//! Read-only view of a machine: supervisor state of every deployed unit,
//! compared with what the machine is configured to run.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::MachinesConfig;
use crate::domain::entities::{ContainerMetrics, RemoteUnitFile, ServiceStatus};
use crate::domain::ports::{HostConnector, ServiceManager, UnitRepository};
use crate::domain::services::RemoteInspector;
use crate::domain::value_objects::base_name;
use crate::error::{HomelabError, HomelabResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitStatus {
    /// Deployed unit name
    pub unit: String,
    #[serde(flatten)]
    pub status: ServiceStatus,
    pub in_config: bool,
    /// Only collected on request, for active units
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<ContainerMetrics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub machine: String,
    pub host: String,
    pub services: Vec<UnitStatus>,
    /// Configured but not deployed
    pub missing: Vec<String>,
    /// Deployed but not configured
    pub orphaned: Vec<String>,
}

impl StatusReport {
    pub fn total(&self) -> usize {
        self.services.len()
    }

    pub fn active_count(&self) -> usize {
        self.services.iter().filter(|s| s.status.active).count()
    }

    pub fn failed_count(&self) -> usize {
        self.services.iter().filter(|s| s.status.failed).count()
    }
}

pub struct StatusUseCase<R: UnitRepository, C: HostConnector> {
    config: MachinesConfig,
    units: R,
    connector: C,
    metrics: bool,
}

impl<R: UnitRepository, C: HostConnector> StatusUseCase<R, C> {
    pub fn new(config: MachinesConfig, units: R, connector: C) -> Self {
        Self {
            config,
            units,
            connector,
            metrics: false,
        }
    }

    /// Also collect container resource usage
    pub fn with_metrics(mut self, metrics: bool) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn execute(&self, name: &str) -> HomelabResult<StatusReport> {
        let machine = self.config.machine(name)?;
        let manager = self
            .connector
            .connect(&machine.target())
            .map_err(|source| HomelabError::Connection {
                host: machine.hostname.clone(),
                source,
            })?;
        let remote = |e| HomelabError::remote(&machine.hostname, e);

        let files = RemoteInspector::new(manager.as_ref())
            .remote_files()
            .map_err(remote)?;
        let deployed: Vec<String> = files
            .iter()
            .map(|f| f.service_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut services = Vec::new();
        for unit in &deployed {
            let service = self.service_name(unit, &files);
            let status = manager.service_status(&service).map_err(remote)?;
            let metrics = if self.metrics && status.active {
                metrics_of(manager.as_ref(), &status)
            } else {
                Vec::new()
            };
            services.push(UnitStatus {
                unit: unit.clone(),
                status,
                in_config: machine.has_service(unit),
                metrics,
            });
        }

        Ok(StatusReport {
            machine: name.to_string(),
            host: machine.hostname.clone(),
            missing: machine
                .services
                .iter()
                .filter(|s| !deployed.contains(s))
                .cloned()
                .collect(),
            orphaned: deployed
                .iter()
                .filter(|d| !machine.has_service(d))
                .cloned()
                .collect(),
            services,
        })
    }

    /// Primary service of a unit.
    ///
    /// Uses the local definition when there is one, otherwise the unit's
    /// remote primary files, named like the unit first.
    fn service_name(&self, unit: &str, remote: &[RemoteUnitFile]) -> String {
        if self.units.exists(unit) {
            if let Ok(service) = self.units.primary_service(unit) {
                return service;
            }
        }
        let primaries: Vec<&RemoteUnitFile> = remote
            .iter()
            .filter(|f| f.service_name == unit && f.kind.is_primary())
            .collect();
        primaries
            .iter()
            .find(|f| base_name(&f.filename) == unit)
            .or_else(|| primaries.first())
            .map(|f| f.generated_service())
            .unwrap_or_else(|| unit.to_string())
    }
}

/// Usage figures are best effort; a container can exit between queries
fn metrics_of(manager: &dyn ServiceManager, status: &ServiceStatus) -> Vec<ContainerMetrics> {
    match manager.container_metrics(&status.containers) {
        Ok(metrics) => metrics,
        Err(e) => {
            log::warn!("could not read metrics for {}: {}", status.name, e);
            Vec::new()
        }
    }
}
