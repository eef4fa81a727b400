//! End-to-end reconciliation scenarios.
//!
//! Real unit files in a temporary services directory, an in-memory host
//! behind the supervisor port.

mod common;

#[path = "scenarios/sync_plan.rs"]
mod sync_plan;

#[path = "scenarios/undeploy.rs"]
mod undeploy;
