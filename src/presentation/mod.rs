//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use homelab::presentation::factory;
//!
//! let use_case = factory::create_sync_use_case(&paths, config, false);
//! let outcome = use_case.execute("nas", &options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_status_use_case, create_sync_use_case, create_undeploy_use_case};
