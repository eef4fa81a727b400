//! Apply Executor
//!
//! Runs a confirmed plan against one host in a fixed order:
//! remove, stop updated units, upload added units, upload updated units,
//! reload once, start added then updated units.
//!
//! Per-unit failures are recorded in the summary and never stop sibling
//! units. If the unit directory cannot be created, every unit waiting for
//! upload fails and the reload still runs for completed removals. Only a
//! failed reload aborts the run.

use std::collections::{BTreeMap, HashSet};

use crate::domain::entities::{ApplyPhase, ApplySummary, RemoteUnitFile, Unit};
use crate::domain::ports::{ServiceManager, SyncEvent, SyncEventSink};
use crate::domain::services::{RemoteInspector, SyncPlan};
use crate::error::{HomelabError, HomelabResult};

/// Desired units resolved from local definitions, by name
pub type ResolvedUnits = BTreeMap<String, Unit>;

pub struct ApplyExecutor<'a, M: ServiceManager + ?Sized> {
    manager: &'a M,
    events: &'a dyn SyncEventSink,
}

impl<'a, M: ServiceManager + ?Sized> ApplyExecutor<'a, M> {
    pub fn new(manager: &'a M, events: &'a dyn SyncEventSink) -> Self {
        Self { manager, events }
    }

    pub fn apply(&self, plan: &SyncPlan, units: &ResolvedUnits) -> HomelabResult<ApplySummary> {
        let mut summary = ApplySummary::new();
        // Units whose files did not reach the host; they are not started.
        let mut blocked: HashSet<String> = HashSet::new();

        self.remove_phase(&plan.to_remove, &mut summary)?;
        self.stop_phase(&plan.to_update, units, &mut summary, &mut blocked);

        if !plan.to_add.is_empty() || !plan.to_update.is_empty() {
            if let Err(e) = self.manager.ensure_unit_dir() {
                let error = format!("could not create unit directory: {}", e);
                for name in plan.to_add.iter().chain(&plan.to_update) {
                    if blocked.insert(name.clone()) {
                        self.fail(&mut summary, name, ApplyPhase::Upload, error.clone());
                    }
                }
            }
        }
        self.upload_phase(&plan.to_add, units, &mut summary, &mut blocked);
        self.upload_phase(&plan.to_update, units, &mut summary, &mut blocked);

        if plan.has_changes() {
            self.phase(ApplyPhase::Reload, 1);
            self.manager
                .reload_daemon()
                .map_err(|source| HomelabError::DaemonReload {
                    host: self.manager.host().to_string(),
                    source,
                })?;
            self.events.on_event(SyncEvent::Reloaded {
                host: self.manager.host().to_string(),
            });
        }

        let started = self.start_phase(&plan.to_add, units, &mut summary, &blocked);
        summary.added = started;
        let started = self.start_phase(&plan.to_update, units, &mut summary, &blocked);
        summary.updated = started;

        Ok(summary)
    }

    fn phase(&self, phase: ApplyPhase, units: usize) {
        if units > 0 {
            self.events.on_event(SyncEvent::PhaseStarted { phase, units });
        }
    }

    fn progress(&self, service: &str, phase: ApplyPhase, detail: impl Into<String>) {
        if self.events.wants_detailed_events() {
            self.events.on_event(SyncEvent::UnitProgress {
                service: service.to_string(),
                phase,
                detail: detail.into(),
            });
        }
    }

    fn warn(&self, summary: &mut ApplySummary, unit: &str, phase: ApplyPhase, message: String) {
        self.events.on_event(SyncEvent::UnitWarning {
            service: unit.to_string(),
            phase,
            message: message.clone(),
        });
        summary.warn(unit, phase, message);
    }

    fn fail(&self, summary: &mut ApplySummary, unit: &str, phase: ApplyPhase, error: String) {
        self.events.on_event(SyncEvent::UnitFailed {
            service: unit.to_string(),
            phase,
            error: error.clone(),
        });
        summary.fail(unit, phase, error);
    }

    fn remove_phase(&self, to_remove: &[String], summary: &mut ApplySummary) -> HomelabResult<()> {
        if to_remove.is_empty() {
            return Ok(());
        }
        self.phase(ApplyPhase::Remove, to_remove.len());

        let inventory = RemoteInspector::new(self.manager)
            .remote_files()
            .map_err(|e| HomelabError::remote(self.manager.host(), e))?;

        for unit in to_remove {
            let files: Vec<&RemoteUnitFile> = inventory
                .iter()
                .filter(|f| &f.service_name == unit)
                .collect();

            self.stop_related(unit, &files, summary);

            let mut failed = false;
            for file in &files {
                if let Err(e) = self.manager.remove_unit_file(&file.filename) {
                    self.fail(summary, unit, ApplyPhase::Remove, e.to_string());
                    failed = true;
                    break;
                }
            }
            if !failed {
                self.progress(unit, ApplyPhase::Remove, format!("{} file(s)", files.len()));
                summary.removed.push(unit.clone());
            }
        }
        Ok(())
    }

    /// Stop every active service generated from the unit's remote files
    fn stop_related(&self, unit: &str, files: &[&RemoteUnitFile], summary: &mut ApplySummary) {
        let mut services: Vec<String> = Vec::new();
        for file in files {
            let service = file.generated_service();
            if !services.contains(&service) {
                services.push(service);
            }
        }

        for service in services {
            match self.manager.is_active(&service) {
                Ok(false) => {}
                Ok(true) => match self.manager.stop(&service) {
                    Ok(()) => self.progress(unit, ApplyPhase::Stop, service),
                    Err(e) => self.warn(
                        summary,
                        unit,
                        ApplyPhase::Stop,
                        format!("could not stop {}: {}", service, e),
                    ),
                },
                Err(e) => self.warn(
                    summary,
                    unit,
                    ApplyPhase::Stop,
                    format!("could not query {}: {}", service, e),
                ),
            }
        }
    }

    fn stop_phase(
        &self,
        to_update: &[String],
        units: &ResolvedUnits,
        summary: &mut ApplySummary,
        blocked: &mut HashSet<String>,
    ) {
        self.phase(ApplyPhase::Stop, to_update.len());
        for name in to_update {
            let Some(unit) = units.get(name) else {
                self.fail(summary, name, ApplyPhase::Stop, unresolved(name));
                blocked.insert(name.clone());
                continue;
            };
            let service = unit.primary_service();
            match self.manager.stop(&service) {
                Ok(()) => self.progress(name, ApplyPhase::Stop, service),
                Err(e) => self.warn(
                    summary,
                    name,
                    ApplyPhase::Stop,
                    format!("could not stop {}: {}", service, e),
                ),
            }
        }
    }

    fn upload_phase(
        &self,
        names: &[String],
        units: &ResolvedUnits,
        summary: &mut ApplySummary,
        blocked: &mut HashSet<String>,
    ) {
        self.phase(ApplyPhase::Upload, names.len());
        for name in names {
            if blocked.contains(name) {
                continue;
            }
            let Some(unit) = units.get(name) else {
                self.fail(summary, name, ApplyPhase::Upload, unresolved(name));
                blocked.insert(name.clone());
                continue;
            };
            match self.manager.upload_files(unit.files()) {
                Ok(()) => self.progress(
                    name,
                    ApplyPhase::Upload,
                    format!("{} file(s)", unit.files().len()),
                ),
                Err(e) => {
                    self.fail(summary, name, ApplyPhase::Upload, e.to_string());
                    blocked.insert(name.clone());
                }
            }
        }
    }

    fn start_phase(
        &self,
        names: &[String],
        units: &ResolvedUnits,
        summary: &mut ApplySummary,
        blocked: &HashSet<String>,
    ) -> Vec<String> {
        let mut started = Vec::new();
        let startable: Vec<&Unit> = names
            .iter()
            .filter(|n| !blocked.contains(*n))
            .filter_map(|n| units.get(n))
            .collect();

        self.phase(ApplyPhase::Start, startable.len());
        for unit in startable {
            let service = unit.primary_service();
            match self.manager.start(&service) {
                Ok(()) => {
                    self.progress(unit.name(), ApplyPhase::Start, service);
                    started.push(unit.name().to_string());
                }
                Err(e) => self.fail(summary, unit.name(), ApplyPhase::Start, e.to_string()),
            }
        }
        started
    }
}

fn unresolved(name: &str) -> String {
    format!("no local definition loaded for '{}'", name)
}
