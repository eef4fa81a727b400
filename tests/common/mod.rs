//! Common test utilities for homelab integration tests.
//!
//! This module provides:
//! - `TestProject`: a temporary project root with machines and services
//! - `FakeHost` / `FakeConnector`: an in-memory host behind the supervisor port
//! - `CountingApprover`: records how often confirmation was asked

#![allow(dead_code, unused_imports)]

pub mod fake_host;
pub mod project;

pub use fake_host::*;
pub use project::*;
