//! Confirmation Gate
//!
//! Presents the plan and decides whether the executor may run.

use crate::domain::ports::{Approver, SyncEvent, SyncEventSink};
use crate::domain::services::SyncPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    InSync,
    DryRun,
    Cancelled,
    Proceed,
}

pub struct ConfirmationGate<'a> {
    approver: &'a dyn Approver,
    events: &'a dyn SyncEventSink,
}

impl<'a> ConfirmationGate<'a> {
    pub fn new(approver: &'a dyn Approver, events: &'a dyn SyncEventSink) -> Self {
        Self { approver, events }
    }

    /// Emit the plan, then: no changes, dry run, auto-approve, or ask
    pub fn evaluate(
        &self,
        machine: &str,
        plan: &SyncPlan,
        dry_run: bool,
        auto_approve: bool,
    ) -> GateDecision {
        self.events.on_event(SyncEvent::Planned {
            machine: machine.to_string(),
            plan: plan.clone(),
        });

        let machine = machine.to_string();
        if !plan.has_changes() {
            self.events.on_event(SyncEvent::InSync { machine });
            return GateDecision::InSync;
        }
        if dry_run {
            self.events.on_event(SyncEvent::DryRun { machine });
            return GateDecision::DryRun;
        }
        if auto_approve || self.approver.approve(&machine, plan) {
            return GateDecision::Proceed;
        }
        self.events.on_event(SyncEvent::Cancelled { machine });
        GateDecision::Cancelled
    }
}
