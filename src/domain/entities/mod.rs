//! Domain Entities
//!
//! Transient objects built and discarded within one invocation.

mod remote_unit;
mod status;
mod summary;
mod unit;

pub use remote_unit::RemoteUnitFile;
pub use status::{ContainerInfo, ContainerMetrics, ServiceStatus};
pub use summary::{ApplyPhase, ApplySummary, UnitFailure, UnitWarning};
pub use unit::{Unit, UnitFile, Validation};
