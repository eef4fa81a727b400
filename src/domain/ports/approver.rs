//! Approver port - operator confirmation of a computed plan

use crate::domain::services::SyncPlan;

pub trait Approver {
    /// Ask whether `plan` may be applied to `machine`
    fn approve(&self, machine: &str, plan: &SyncPlan) -> bool;
}

/// Fixed answer, for non-interactive callers and tests
pub struct FixedApprover(pub bool);

impl Approver for FixedApprover {
    fn approve(&self, _machine: &str, _plan: &SyncPlan) -> bool {
        self.0
    }
}
