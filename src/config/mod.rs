//! Configuration module for homelab
//!
//! The machines file declares, per host, how to reach it and which units
//! it should run. It is loaded once per invocation and handed to use cases
//! by reference.

mod loader;
mod paths;
mod types;

pub use loader::{load_with_warnings, parse_with_warnings, ConfigWarning};
pub use paths::{ProjectPaths, CONFIG_ENV, ROOT_ENV};
pub use types::{MachineConfig, MachinesConfig};
