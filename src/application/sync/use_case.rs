//! Sync Use Case
//!
//! Orchestrates one host run:
//! 1. Resolve and validate desired units locally
//! 2. Connect
//! 3. Inspect deployed units
//! 4. Plan, checking drift only for desired-and-deployed units
//! 5. Confirm
//! 6. Apply
//!
//! The session opened in step 2 is dropped before the run returns.

use std::sync::Arc;

use crate::config::{MachineConfig, MachinesConfig};
use crate::domain::ports::{
    Approver, HostConnector, NoopEventSink, RemoteError, ServiceManager, SyncEvent,
    SyncEventSink, UnitRepository,
};
use crate::domain::services::{DriftDetector, Planner, RemoteInspector};
use crate::error::{HomelabError, HomelabResult};

use super::executor::{ApplyExecutor, ResolvedUnits};
use super::gate::{ConfirmationGate, GateDecision};
use super::options::SyncOptions;
use super::result::{HostReport, MultiHostReport, SyncOutcome};

/// A host whose desired units passed local validation
struct PreparedHost<'c> {
    name: String,
    machine: &'c MachineConfig,
    desired: Vec<String>,
    units: ResolvedUnits,
}

pub struct SyncUseCase<R, C>
where
    R: UnitRepository,
    C: HostConnector,
{
    config: MachinesConfig,
    units: R,
    connector: C,
    approver: Box<dyn Approver>,
}

impl<R, C> SyncUseCase<R, C>
where
    R: UnitRepository,
    C: HostConnector,
{
    pub fn new(
        config: MachinesConfig,
        units: R,
        connector: C,
        approver: Box<dyn Approver>,
    ) -> Self {
        Self {
            config,
            units,
            connector,
            approver,
        }
    }

    pub fn config(&self) -> &MachinesConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn connector(&self) -> &C {
        &self.connector
    }

    /// Sync one machine without event reporting
    pub fn execute(&self, machine: &str, options: &SyncOptions) -> HomelabResult<SyncOutcome> {
        self.execute_with_events(machine, options, Arc::new(NoopEventSink))
    }

    /// Sync one machine
    pub fn execute_with_events(
        &self,
        machine: &str,
        options: &SyncOptions,
        events: Arc<dyn SyncEventSink>,
    ) -> HomelabResult<SyncOutcome> {
        let host = self.prepare(machine, options, events.as_ref())?;
        self.run(&host, options, events.as_ref())
    }

    /// Sync every machine in name order.
    ///
    /// All machines are validated before any is contacted. After that a
    /// failing host is reported and the next one still runs.
    pub fn execute_all(
        &self,
        options: &SyncOptions,
        events: Arc<dyn SyncEventSink>,
    ) -> HomelabResult<MultiHostReport> {
        let prepared = self
            .config
            .machines()
            .map(|(name, _)| self.prepare(name, options, events.as_ref()))
            .collect::<HomelabResult<Vec<_>>>()?;

        let mut report = MultiHostReport::default();
        for host in &prepared {
            let result = self.run(host, options, events.as_ref());
            if let Err(e) = &result {
                events.on_event(SyncEvent::HostFailed {
                    machine: host.name.clone(),
                    error: e.to_string(),
                });
            }
            report.hosts.push(HostReport {
                machine: host.name.clone(),
                result,
            });
        }
        Ok(report)
    }

    fn prepare(
        &self,
        name: &str,
        options: &SyncOptions,
        events: &dyn SyncEventSink,
    ) -> HomelabResult<PreparedHost<'_>> {
        let machine = self.config.machine(name)?;

        let desired = match options.scope.service() {
            Some(service) => {
                if !machine.has_service(service) {
                    events.on_event(SyncEvent::Notice {
                        message: self.unconfigured_notice(name, service),
                    });
                }
                vec![service.to_string()]
            }
            None => machine.services.clone(),
        };

        let units = self.resolve_units(&desired)?;
        Ok(PreparedHost {
            name: name.to_string(),
            machine,
            desired,
            units,
        })
    }

    fn unconfigured_notice(&self, machine: &str, service: &str) -> String {
        let elsewhere = self.config.machines_with_service(service);
        if elsewhere.is_empty() {
            format!("service '{}' is not configured for '{}'", service, machine)
        } else {
            format!(
                "service '{}' is not configured for '{}' (configured on: {})",
                service,
                machine,
                elsewhere.join(", ")
            )
        }
    }

    /// Load and validate every desired unit before any remote contact
    fn resolve_units(&self, desired: &[String]) -> HomelabResult<ResolvedUnits> {
        let mut resolved = ResolvedUnits::new();
        for name in desired {
            if !self.units.exists(name) {
                return Err(HomelabError::ServiceNotFound {
                    name: name.clone(),
                    dir: self.units.location(name),
                });
            }
            let unit = self.units.load(name)?;
            if let Some(reason) = unit.validate().reason() {
                return Err(HomelabError::InvalidService {
                    name: name.clone(),
                    reason: reason.to_string(),
                });
            }
            resolved.insert(name.clone(), unit);
        }
        Ok(resolved)
    }

    fn run(
        &self,
        host: &PreparedHost<'_>,
        options: &SyncOptions,
        events: &dyn SyncEventSink,
    ) -> HomelabResult<SyncOutcome> {
        let hostname = host.machine.hostname.clone();
        events.on_event(SyncEvent::Started {
            machine: host.name.clone(),
            host: hostname.clone(),
            services: host.desired.clone(),
            force: options.force,
        });

        let manager = self
            .connector
            .connect(&host.machine.target())
            .map_err(|source| HomelabError::Connection {
                host: hostname.clone(),
                source,
            })?;
        events.on_event(SyncEvent::Connected {
            host: hostname.clone(),
        });

        self.reconcile(host, manager.as_ref(), options, events)
    }

    fn reconcile(
        &self,
        host: &PreparedHost<'_>,
        manager: &dyn ServiceManager,
        options: &SyncOptions,
        events: &dyn SyncEventSink,
    ) -> HomelabResult<SyncOutcome> {
        let remote = |e: RemoteError| HomelabError::remote(manager.host(), e);

        let deployed = RemoteInspector::new(manager)
            .deployed_units()
            .map_err(remote)?;
        let (desired, deployed) = options.scope.restrict(&host.desired, &deployed);

        let detector = DriftDetector::new(manager);
        let plan = Planner::try_build(&desired, &deployed, options.force, |name| {
            let Some(unit) = host.units.get(name) else {
                return Ok(true);
            };
            let drift = detector.detect(unit)?;
            if let Some(drift) = &drift {
                events.on_event(SyncEvent::DriftDetected {
                    service: name.to_string(),
                    file: drift.filename().to_string(),
                });
            }
            Ok(drift.is_some())
        })
        .map_err(remote)?;

        let gate = ConfirmationGate::new(self.approver.as_ref(), events);
        match gate.evaluate(&host.name, &plan, options.dry_run, options.yes) {
            GateDecision::InSync => Ok(SyncOutcome::InSync),
            GateDecision::DryRun => Ok(SyncOutcome::DryRun(plan)),
            GateDecision::Cancelled => Ok(SyncOutcome::Cancelled(plan)),
            GateDecision::Proceed => {
                let summary = ApplyExecutor::new(manager, events).apply(&plan, &host.units)?;
                events.on_event(SyncEvent::Completed {
                    machine: host.name.clone(),
                    summary: summary.clone(),
                });
                Ok(SyncOutcome::Applied { plan, summary })
            }
        }
    }
}
