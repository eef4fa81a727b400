pub mod list;
pub mod plan;
pub mod status;
pub mod sync;
