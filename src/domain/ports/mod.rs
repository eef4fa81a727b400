//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod approver;
pub mod remote_shell;
pub mod service_manager;
pub mod sync_events;
pub mod unit_repository;

pub use approver::{Approver, FixedApprover};
pub use remote_shell::{
    CommandOutput, FileTransfer, HostTarget, RemoteError, RemoteResult, RemoteShell,
};
pub use service_manager::{HostConnector, ServiceManager};
pub use sync_events::{FanoutEventSink, NoopEventSink, SyncEvent, SyncEventSink};
pub use unit_repository::UnitRepository;
