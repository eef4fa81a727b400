//! Apply outcome entities
//!
//! Per-unit results collected while a plan is executed against one host.

use serde::Serialize;

/// Step of the apply sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyPhase {
    Remove,
    Stop,
    Upload,
    Reload,
    Start,
}

impl std::fmt::Display for ApplyPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ApplyPhase::Remove => "remove",
            ApplyPhase::Stop => "stop",
            ApplyPhase::Upload => "upload",
            ApplyPhase::Reload => "reload",
            ApplyPhase::Start => "start",
        };
        f.write_str(s)
    }
}

/// A unit that did not complete its part of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitFailure {
    pub unit: String,
    pub phase: ApplyPhase,
    pub error: String,
}

/// A non-fatal problem that did not block the unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitWarning {
    pub unit: String,
    pub phase: ApplyPhase,
    pub message: String,
}

/// What actually happened on the host.
///
/// A unit appears in `added`, `updated` or `removed` only after every step
/// for it succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplySummary {
    pub added: Vec<String>,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
    pub failures: Vec<UnitFailure>,
    pub warnings: Vec<UnitWarning>,
}

impl ApplySummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, unit: &str, phase: ApplyPhase, error: impl ToString) {
        self.failures.push(UnitFailure {
            unit: unit.to_string(),
            phase,
            error: error.to_string(),
        });
    }

    pub fn warn(&mut self, unit: &str, phase: ApplyPhase, message: impl ToString) {
        self.warnings.push(UnitWarning {
            unit: unit.to_string(),
            phase,
            message: message.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn has_failed(&self, unit: &str) -> bool {
        self.failures.iter().any(|f| f.unit == unit)
    }

    /// Units that completed successfully
    pub fn succeeded_count(&self) -> usize {
        self.added.len() + self.updated.len() + self.removed.len()
    }
}
