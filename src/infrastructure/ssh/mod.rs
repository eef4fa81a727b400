//! SSH transport

mod quote;
mod session;

pub use quote::{quote, quote_path};
pub use session::SshSession;

use crate::domain::ports::{HostConnector, HostTarget, RemoteResult, ServiceManager};
use crate::infrastructure::systemd::SystemdSupervisor;

/// Opens a control-master session and wraps it in a systemd supervisor
pub struct SshConnector;

impl HostConnector for SshConnector {
    fn connect(&self, target: &HostTarget) -> RemoteResult<Box<dyn ServiceManager>> {
        let session = SshSession::connect(target)?;
        Ok(Box::new(SystemdSupervisor::new(session)))
    }
}
