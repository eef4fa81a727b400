//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for automation.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// NDJSON on stdout, tagged with the running command
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert("command".into(), self.command.into());
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let json = match event {
            SyncEvent::Started {
                machine,
                host,
                services,
                force,
            } => serde_json::json!({
                "event": "start",
                "machine": machine,
                "host": host,
                "services": services,
                "force": force,
            }),

            SyncEvent::Connected { host } => serde_json::json!({
                "event": "connected",
                "host": host,
            }),

            SyncEvent::Notice { message } => serde_json::json!({
                "event": "notice",
                "message": message,
            }),

            SyncEvent::DriftDetected { service, file } => serde_json::json!({
                "event": "drift",
                "service": service,
                "file": file,
            }),

            SyncEvent::Planned { machine, plan } => serde_json::json!({
                "event": "plan",
                "machine": machine,
                "total_changes": plan.total_changes(),
                "plan": plan,
            }),

            SyncEvent::InSync { machine } => serde_json::json!({
                "event": "in_sync",
                "machine": machine,
            }),

            SyncEvent::DryRun { machine } => serde_json::json!({
                "event": "dry_run",
                "machine": machine,
            }),

            SyncEvent::Cancelled { machine } => serde_json::json!({
                "event": "cancelled",
                "machine": machine,
            }),

            SyncEvent::PhaseStarted { phase, units } => serde_json::json!({
                "event": "phase",
                "phase": phase,
                "units": units,
            }),

            SyncEvent::UnitProgress {
                service,
                phase,
                detail,
            } => serde_json::json!({
                "event": "item_done",
                "service": service,
                "phase": phase,
                "detail": detail,
            }),

            SyncEvent::UnitWarning {
                service,
                phase,
                message,
            } => serde_json::json!({
                "event": "item_warning",
                "service": service,
                "phase": phase,
                "message": message,
            }),

            SyncEvent::UnitFailed {
                service,
                phase,
                error,
            } => serde_json::json!({
                "event": "item_error",
                "service": service,
                "phase": phase,
                "error": error,
            }),

            SyncEvent::Reloaded { host } => serde_json::json!({
                "event": "reloaded",
                "host": host,
            }),

            SyncEvent::Completed { machine, summary } => {
                let status = if summary.has_failures() {
                    "partial"
                } else {
                    "success"
                };
                serde_json::json!({
                    "event": "complete",
                    "machine": machine,
                    "status": status,
                    "added": summary.added,
                    "updated": summary.updated,
                    "removed": summary.removed,
                    "failures": summary.failures,
                    "warnings": summary.warnings,
                })
            }

            SyncEvent::HostFailed { machine, error } => serde_json::json!({
                "event": "host_error",
                "machine": machine,
                "error": error,
            }),
        };

        self.write_event(json);
    }
}
