//! Sync Options

use crate::domain::services::PlanScope;

/// Options for the sync use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Whole machine or a single unit
    pub scope: PlanScope,
    /// Redeploy every desired-and-deployed unit without checking drift
    pub force: bool,
    /// Show the plan, change nothing
    pub dry_run: bool,
    /// Skip the confirmation prompt
    pub yes: bool,
}

impl SyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.scope = PlanScope::Service(service.into());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_yes(mut self, yes: bool) -> Self {
        self.yes = yes;
        self
    }
}
