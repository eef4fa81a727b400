//! Domain Layer
//!
//! The reconciliation core of homelab.
//!
//! ## Structure
//!
//! - `entities/` - Unit, UnitFile, RemoteUnitFile, ServiceStatus, ApplySummary
//! - `value_objects/` - ContentHash, UnitKind, service name derivation
//! - `services/` - Planner, RemoteInspector, DriftDetector
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing here opens files or sockets; all host access goes through ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
