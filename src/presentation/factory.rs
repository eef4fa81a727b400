//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{StatusUseCase, SyncUseCase, UndeployUseCase};
use crate::config::{MachinesConfig, ProjectPaths};
use crate::domain::ports::{Approver, FixedApprover};
use crate::infrastructure::{FsUnitRepository, SshConnector, TerminalApprover};

/// Type alias for the concrete SyncUseCase with all dependencies
pub type ConcreteSyncUseCase = SyncUseCase<FsUnitRepository, SshConnector>;

/// Type alias for the concrete StatusUseCase with all dependencies
pub type ConcreteStatusUseCase = StatusUseCase<FsUnitRepository, SshConnector>;

/// Type alias for the concrete UndeployUseCase with all dependencies
pub type ConcreteUndeployUseCase = UndeployUseCase<SshConnector>;

/// Approver for a run: auto-approve skips the prompt entirely
pub fn create_approver(auto_approve: bool) -> Box<dyn Approver> {
    if auto_approve {
        Box::new(FixedApprover(true))
    } else {
        Box::new(TerminalApprover)
    }
}

pub fn create_sync_use_case(
    paths: &ProjectPaths,
    config: MachinesConfig,
    auto_approve: bool,
) -> ConcreteSyncUseCase {
    SyncUseCase::new(
        config,
        FsUnitRepository::new(paths.services_dir()),
        SshConnector,
        create_approver(auto_approve),
    )
}

pub fn create_status_use_case(
    paths: &ProjectPaths,
    config: MachinesConfig,
) -> ConcreteStatusUseCase {
    StatusUseCase::new(config, FsUnitRepository::new(paths.services_dir()), SshConnector)
}

pub fn create_undeploy_use_case(
    config: MachinesConfig,
    auto_approve: bool,
) -> ConcreteUndeployUseCase {
    UndeployUseCase::new(config, SshConnector, create_approver(auto_approve))
}
