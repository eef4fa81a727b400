//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::HostTarget;
use crate::domain::value_objects::is_unit_dir_name;
use crate::error::{HomelabError, HomelabResult};

/// Contents of `machines.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachinesConfig {
    /// Machines by name, in sorted order
    #[serde(default)]
    pub machines: BTreeMap<String, MachineConfig>,
}

/// One managed host
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachineConfig {
    pub hostname: String,
    pub user: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// SSH port, when not the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Desired units, in deploy order
    #[serde(default)]
    pub services: Vec<String>,
}

impl MachineConfig {
    pub fn target(&self) -> HostTarget {
        HostTarget {
            hostname: self.hostname.clone(),
            user: self.user.clone(),
            port: self.port,
        }
    }

    pub fn has_service(&self, name: &str) -> bool {
        self.services.iter().any(|s| s == name)
    }
}

impl MachinesConfig {
    /// Look up a machine by name
    pub fn machine(&self, name: &str) -> HomelabResult<&MachineConfig> {
        self.machines
            .get(name)
            .ok_or_else(|| HomelabError::MachineNotFound {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// All machines, sorted by name
    pub fn machines(&self) -> impl Iterator<Item = (&str, &MachineConfig)> {
        self.machines.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> Vec<String> {
        self.machines.keys().cloned().collect()
    }

    /// Machines that list `service` among their desired units
    pub fn machines_with_service(&self, service: &str) -> Vec<&str> {
        self.machines()
            .filter(|(_, m)| m.has_service(service))
            .map(|(name, _)| name)
            .collect()
    }

    /// Structural checks that serde cannot express
    pub fn validate(&self, path: &Path) -> HomelabResult<()> {
        let invalid = |message: String| HomelabError::InvalidConfig {
            path: path.to_path_buf(),
            message,
        };

        for (name, machine) in self.machines() {
            if machine.hostname.trim().is_empty() {
                return Err(invalid(format!("machine '{}' has an empty hostname", name)));
            }
            if machine.user.trim().is_empty() {
                return Err(invalid(format!("machine '{}' has an empty user", name)));
            }

            let mut seen = std::collections::HashSet::new();
            for service in &machine.services {
                if service.trim().is_empty() {
                    return Err(invalid(format!(
                        "machine '{}' lists an empty service name",
                        name
                    )));
                }
                if !is_unit_dir_name(service) {
                    return Err(invalid(format!(
                        "machine '{}': service '{}' must be a directory name under services/",
                        name, service
                    )));
                }
                if !seen.insert(service.as_str()) {
                    return Err(invalid(format!(
                        "machine '{}' lists service '{}' more than once",
                        name, service
                    )));
                }
            }
        }
        Ok(())
    }
}
