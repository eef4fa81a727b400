//! Sync Module
//!
//! Reconciles the units configured for a machine with what the machine
//! actually runs.
//!
//! ## Structure
//!
//! - `options` - `SyncOptions`
//! - `result` - `SyncOutcome`, `MultiHostReport`
//! - `gate` - `ConfirmationGate`
//! - `executor` - `ApplyExecutor`
//! - `use_case` - `SyncUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use homelab::application::sync::{SyncOptions, SyncUseCase};
//!
//! let use_case = SyncUseCase::new(config, units, SshConnector, Box::new(TerminalApprover));
//! let outcome = use_case.execute("nas", &SyncOptions::new())?;
//! ```

mod executor;
mod gate;
mod options;
mod result;
mod use_case;

pub use executor::{ApplyExecutor, ResolvedUnits};
pub use gate::{ConfirmationGate, GateDecision};
pub use options::SyncOptions;
pub use result::{HostReport, MultiHostReport, SyncOutcome};
pub use use_case::SyncUseCase;
