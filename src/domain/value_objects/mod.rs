//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod service_name;
mod unit_kind;

pub use hash::ContentHash;
pub use service_name::{base_name, is_unit_dir_name, parse_service_name, NAME_SEPARATOR};
pub use unit_kind::UnitKind;
