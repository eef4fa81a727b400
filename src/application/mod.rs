//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncUseCase` - Plan, confirm and apply one machine or all machines
//! - `StatusUseCase` - Supervisor state of deployed units
//! - `UndeployUseCase` - Remove deployed units

pub mod status;
pub mod sync;
pub mod undeploy;

#[cfg(test)]
pub(crate) mod testing;

pub use status::{StatusReport, StatusUseCase, UnitStatus};
pub use sync::{
    ApplyExecutor, ConfirmationGate, GateDecision, HostReport, MultiHostReport, SyncOptions,
    SyncOutcome, SyncUseCase,
};
pub use undeploy::{UndeployOptions, UndeployUseCase};
