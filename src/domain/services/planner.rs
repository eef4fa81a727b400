//! Sync planning service
//!
//! Pure domain logic: classifies desired and deployed unit names into a
//! reconciliation plan. No I/O happens here; drift is supplied by the
//! caller as a predicate.

use serde::Serialize;

/// Reconciliation output for one host at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
    /// Desired but not deployed
    pub to_add: Vec<String>,
    /// Deployed but not desired
    pub to_remove: Vec<String>,
    /// Desired, deployed and drifted (or forced)
    pub to_update: Vec<String>,
    /// Desired, deployed and unchanged
    pub to_keep: Vec<String>,
}

impl SyncPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan that only removes the given units
    pub fn removal(units: impl IntoIterator<Item = String>) -> Self {
        Self {
            to_remove: dedup(units),
            ..Self::default()
        }
    }

    /// Number of units that will be mutated
    pub fn total_changes(&self) -> usize {
        self.to_add.len() + self.to_remove.len() + self.to_update.len()
    }

    pub fn has_changes(&self) -> bool {
        self.total_changes() > 0
    }
}

/// Which units a run considers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlanScope {
    /// Every unit configured for the machine; undesired deployed units are removed
    #[default]
    Machine,
    /// Exactly one unit; nothing else is added, kept or removed
    Service(String),
}

impl PlanScope {
    /// Restrict desired and deployed names to this scope
    pub fn restrict(&self, desired: &[String], deployed: &[String]) -> (Vec<String>, Vec<String>) {
        match self {
            PlanScope::Machine => (desired.to_vec(), deployed.to_vec()),
            PlanScope::Service(name) => (
                vec![name.clone()],
                deployed.iter().filter(|d| *d == name).cloned().collect(),
            ),
        }
    }

    pub fn service(&self) -> Option<&str> {
        match self {
            PlanScope::Machine => None,
            PlanScope::Service(name) => Some(name),
        }
    }
}

/// Pure planning service
pub struct Planner;

impl Planner {
    /// Build a plan with an infallible drift predicate.
    ///
    /// `drifted` is consulted only for units that are both desired and
    /// deployed, and never when `forced` is set.
    pub fn build(
        desired: &[String],
        deployed: &[String],
        forced: bool,
        mut drifted: impl FnMut(&str) -> bool,
    ) -> SyncPlan {
        match Self::try_build::<std::convert::Infallible>(desired, deployed, forced, |u| {
            Ok(drifted(u))
        }) {
            Ok(plan) => plan,
            Err(never) => match never {},
        }
    }

    /// Build a plan with a fallible drift predicate; the first error aborts planning.
    ///
    /// Desired-derived lists keep desired order, `to_remove` keeps deployed
    /// order. Duplicate names are ignored.
    pub fn try_build<E>(
        desired: &[String],
        deployed: &[String],
        forced: bool,
        mut drifted: impl FnMut(&str) -> Result<bool, E>,
    ) -> Result<SyncPlan, E> {
        let desired = dedup(desired.iter().cloned());
        let deployed = dedup(deployed.iter().cloned());
        let mut plan = SyncPlan::new();

        for unit in &desired {
            if !deployed.contains(unit) {
                plan.to_add.push(unit.clone());
            } else if forced || drifted(unit)? {
                plan.to_update.push(unit.clone());
            } else {
                plan.to_keep.push(unit.clone());
            }
        }

        plan.to_remove = deployed
            .into_iter()
            .filter(|unit| !desired.contains(unit))
            .collect();

        Ok(plan)
    }
}

fn dedup(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|n| seen.insert(n.clone()))
        .collect()
}
