//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod unit;

pub use unit::FsUnitRepository;
