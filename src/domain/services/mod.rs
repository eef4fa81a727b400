//! Domain Services
//!
//! Business logic over domain entities. The planner is pure; the
//! inspector and drift detector reach the host only through the
//! `ServiceManager` port.

mod drift;
mod inspector;
mod planner;

pub use drift::{DriftDetector, FileDrift};
pub use inspector::RemoteInspector;
pub use planner::{PlanScope, Planner, SyncPlan};
