//! Undeploy Use Case
//!
//! Removes deployed units from a machine through the same confirmation
//! gate and executor as sync.

use std::sync::Arc;

use crate::application::sync::{
    ApplyExecutor, ConfirmationGate, GateDecision, ResolvedUnits, SyncOutcome,
};
use crate::config::MachinesConfig;
use crate::domain::ports::{Approver, HostConnector, SyncEvent, SyncEventSink};
use crate::domain::services::{RemoteInspector, SyncPlan};
use crate::error::{HomelabError, HomelabResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndeployOptions {
    /// Only this unit; otherwise every deployed unit
    pub service: Option<String>,
    pub dry_run: bool,
    pub yes: bool,
}

pub struct UndeployUseCase<C: HostConnector> {
    config: MachinesConfig,
    connector: C,
    approver: Box<dyn Approver>,
}

impl<C: HostConnector> UndeployUseCase<C> {
    pub fn new(config: MachinesConfig, connector: C, approver: Box<dyn Approver>) -> Self {
        Self {
            config,
            connector,
            approver,
        }
    }

    pub fn execute(
        &self,
        name: &str,
        options: &UndeployOptions,
        events: Arc<dyn SyncEventSink>,
    ) -> HomelabResult<SyncOutcome> {
        let machine = self.config.machine(name)?;
        let hostname = machine.hostname.clone();

        events.on_event(SyncEvent::Started {
            machine: name.to_string(),
            host: hostname.clone(),
            services: Vec::new(),
            force: false,
        });
        let manager = self
            .connector
            .connect(&machine.target())
            .map_err(|source| HomelabError::Connection {
                host: hostname.clone(),
                source,
            })?;
        events.on_event(SyncEvent::Connected {
            host: hostname.clone(),
        });

        let deployed = RemoteInspector::new(manager.as_ref())
            .deployed_units()
            .map_err(|e| HomelabError::remote(&hostname, e))?;

        let targets: Vec<String> = match &options.service {
            Some(service) => {
                if !deployed.contains(service) {
                    events.on_event(SyncEvent::Notice {
                        message: format!("service '{}' is not deployed on '{}'", service, name),
                    });
                }
                deployed.into_iter().filter(|d| d == service).collect()
            }
            None => deployed,
        };
        let plan = SyncPlan::removal(targets);

        let gate = ConfirmationGate::new(self.approver.as_ref(), events.as_ref());
        match gate.evaluate(name, &plan, options.dry_run, options.yes) {
            GateDecision::InSync => Ok(SyncOutcome::InSync),
            GateDecision::DryRun => Ok(SyncOutcome::DryRun(plan)),
            GateDecision::Cancelled => Ok(SyncOutcome::Cancelled(plan)),
            GateDecision::Proceed => {
                let summary = ApplyExecutor::new(manager.as_ref(), events.as_ref())
                    .apply(&plan, &ResolvedUnits::new())?;
                events.on_event(SyncEvent::Completed {
                    machine: name.to_string(),
                    summary: summary.clone(),
                });
                Ok(SyncOutcome::Applied { plan, summary })
            }
        }
    }
}
