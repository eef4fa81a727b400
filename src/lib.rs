//! homelab - declarative Podman Quadlet deployment over SSH
//!
//! Each machine in `machines/machines.yaml` lists the units it should run.
//! A unit is a directory of Quadlet files under `services/<name>/`. Syncing
//! a machine compares those files with the host's
//! `~/.config/containers/systemd` directory and applies the difference
//! through `systemctl --user`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    StatusUseCase, SyncOptions, SyncOutcome, SyncUseCase, UndeployOptions, UndeployUseCase,
};
pub use config::{MachineConfig, MachinesConfig, ProjectPaths};
pub use domain::services::{PlanScope, Planner, SyncPlan};
pub use domain::value_objects::parse_service_name;
pub use error::{HomelabError, HomelabResult};
