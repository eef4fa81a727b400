//! Log Event Sink
//!
//! Forwards sync events to the `log` facade.

use crate::domain::ports::{SyncEvent, SyncEventSink};

pub struct LogEventSink;

impl SyncEventSink for LogEventSink {
    fn on_event(&self, event: SyncEvent) {
        match event {
            SyncEvent::Started {
                machine,
                host,
                services,
                force,
            } => log::info!(
                "sync {} ({}): {} service(s){}",
                machine,
                host,
                services.len(),
                if force { ", forced" } else { "" }
            ),
            SyncEvent::Connected { host } => log::info!("connected to {}", host),
            SyncEvent::Notice { message } => log::warn!("{}", message),
            SyncEvent::DriftDetected { service, file } => {
                log::debug!("{} drifted at {}", service, file)
            }
            SyncEvent::Planned { machine, plan } => log::info!(
                "plan for {}: +{} ~{} -{} ={}",
                machine,
                plan.to_add.len(),
                plan.to_update.len(),
                plan.to_remove.len(),
                plan.to_keep.len()
            ),
            SyncEvent::InSync { machine } => log::info!("{} already in sync", machine),
            SyncEvent::DryRun { machine } => {
                log::info!("dry run for {}, nothing applied", machine)
            }
            SyncEvent::Cancelled { machine } => log::info!("sync of {} cancelled", machine),
            SyncEvent::PhaseStarted { phase, units } => {
                log::debug!("{} phase: {} unit(s)", phase, units)
            }
            SyncEvent::UnitProgress {
                service,
                phase,
                detail,
            } => log::debug!("{} {}: {}", phase, service, detail),
            SyncEvent::UnitWarning {
                service,
                phase,
                message,
            } => log::warn!("{} {}: {}", phase, service, message),
            SyncEvent::UnitFailed {
                service,
                phase,
                error,
            } => log::error!("{} {} failed: {}", phase, service, error),
            SyncEvent::Reloaded { host } => log::debug!("daemon reloaded on {}", host),
            SyncEvent::Completed { machine, summary } => log::info!(
                "{} complete: {} added, {} updated, {} removed, {} failed",
                machine,
                summary.added.len(),
                summary.updated.len(),
                summary.removed.len(),
                summary.failures.len()
            ),
            SyncEvent::HostFailed { machine, error } => log::error!("{}: {}", machine, error),
        }
    }
}
