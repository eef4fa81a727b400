//! Sync Result
//!
//! Terminal states of a host run.

use crate::domain::entities::ApplySummary;
use crate::domain::services::SyncPlan;
use crate::error::HomelabError;

/// How a host run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Plan had no changes
    InSync,
    /// Plan shown, nothing applied
    DryRun(SyncPlan),
    /// Operator declined
    Cancelled(SyncPlan),
    /// Plan applied; the summary lists per-unit failures
    Applied { plan: SyncPlan, summary: ApplySummary },
}

impl SyncOutcome {
    pub fn plan(&self) -> Option<&SyncPlan> {
        match self {
            SyncOutcome::InSync => None,
            SyncOutcome::DryRun(plan) | SyncOutcome::Cancelled(plan) => Some(plan),
            SyncOutcome::Applied { plan, .. } => Some(plan),
        }
    }

    pub fn summary(&self) -> Option<&ApplySummary> {
        match self {
            SyncOutcome::Applied { summary, .. } => Some(summary),
            _ => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, SyncOutcome::Applied { .. })
    }
}

/// Result of one host in an all-hosts run
#[derive(Debug)]
pub struct HostReport {
    pub machine: String,
    pub result: Result<SyncOutcome, HomelabError>,
}

/// Results of an all-hosts run, in machine order
#[derive(Debug, Default)]
pub struct MultiHostReport {
    pub hosts: Vec<HostReport>,
}

impl MultiHostReport {
    pub fn has_errors(&self) -> bool {
        self.hosts.iter().any(|h| h.result.is_err())
    }

    pub fn failed_machines(&self) -> Vec<&str> {
        self.hosts
            .iter()
            .filter(|h| h.result.is_err())
            .map(|h| h.machine.as_str())
            .collect()
    }

    pub fn succeeded_count(&self) -> usize {
        self.hosts.iter().filter(|h| h.result.is_ok()).count()
    }
}
