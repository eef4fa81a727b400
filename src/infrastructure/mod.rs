//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `ssh/` - OpenSSH control-master session and connector
//! - `systemd` - Quadlet unit directory and `systemctl --user`
//! - `repositories/` - Local unit definitions
//! - `events/` - NDJSON and log event sinks
//! - `approval` - Operator confirmation prompt

pub mod approval;
pub mod events;
pub mod repositories;
pub mod ssh;
pub mod systemd;

pub use approval::TerminalApprover;
pub use events::{JsonEventSink, LogEventSink};
pub use repositories::FsUnitRepository;
pub use ssh::{SshConnector, SshSession};
pub use systemd::SystemdSupervisor;
