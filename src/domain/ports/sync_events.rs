//! Sync Event Port
//!
//! Observable progress of a reconciliation run. Drives the terminal
//! renderer, the NDJSON stream and debug logging.

use crate::domain::entities::{ApplyPhase, ApplySummary};
use crate::domain::services::SyncPlan;

/// Event emitted during sync and undeploy runs
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// Host run started
    Started {
        machine: String,
        host: String,
        services: Vec<String>,
        force: bool,
    },

    /// Session established
    Connected { host: String },

    /// Non-fatal notice before planning
    Notice { message: String },

    /// A desired unit differs from what the host has
    DriftDetected { service: String, file: String },

    /// Plan computed
    Planned { machine: String, plan: SyncPlan },

    /// Nothing to do
    InSync { machine: String },

    /// Plan shown, nothing applied
    DryRun { machine: String },

    /// Operator declined
    Cancelled { machine: String },

    /// Apply phase started
    PhaseStarted { phase: ApplyPhase, units: usize },

    /// A step for one unit succeeded
    UnitProgress {
        service: String,
        phase: ApplyPhase,
        detail: String,
    },

    /// A step for one unit failed without stopping the run
    UnitWarning {
        service: String,
        phase: ApplyPhase,
        message: String,
    },

    /// A unit could not complete
    UnitFailed {
        service: String,
        phase: ApplyPhase,
        error: String,
    },

    /// Unit definitions reloaded
    Reloaded { host: String },

    /// Host run finished
    Completed {
        machine: String,
        summary: ApplySummary,
    },

    /// Host run aborted (multi-host mode continues with the next host)
    HostFailed { machine: String, error: String },
}

/// Trait for receiving sync events
///
/// Implementations:
/// - ConsoleEventSink: terminal progress
/// - JsonEventSink: NDJSON event stream
/// - LogEventSink: debug log lines
/// - NoopEventSink: silent operation
pub trait SyncEventSink: Send + Sync {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);

    /// Whether this sink wants per-unit progress events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Forwards every event to several sinks
pub struct FanoutEventSink {
    sinks: Vec<std::sync::Arc<dyn SyncEventSink>>,
}

impl FanoutEventSink {
    pub fn new(sinks: Vec<std::sync::Arc<dyn SyncEventSink>>) -> Self {
        Self { sinks }
    }
}

impl SyncEventSink for FanoutEventSink {
    fn on_event(&self, event: SyncEvent) {
        let detailed = matches!(
            event,
            SyncEvent::UnitProgress { .. } | SyncEvent::DriftDetected { .. }
        );
        for sink in &self.sinks {
            if detailed && !sink.wants_detailed_events() {
                continue;
            }
            sink.on_event(event.clone());
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.sinks.iter().any(|s| s.wants_detailed_events())
    }
}
