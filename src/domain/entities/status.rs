//! Point-in-time supervisor state of a deployed unit

use serde::Serialize;

/// One container belonging to a running unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerInfo {
    pub name: String,
    pub status: String,
}

impl ContainerInfo {
    /// Parse a `podman ps --format "{{.Names}} {{.Status}}"` line
    pub fn parse_ps_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next()?.to_string();
        let status = parts.collect::<Vec<_>>().join(" ");
        Some(Self { name, status })
    }
}

/// Resource usage of one running container, as podman reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerMetrics {
    pub name: String,
    pub cpu: String,
    pub memory: String,
    pub network: String,
}

impl ContainerMetrics {
    /// Field separator of the `podman stats` format string
    pub const SEPARATOR: char = '|';

    /// Parse a `podman stats --format "{{.Name}}|{{.CPUPerc}}|{{.MemUsage}}|{{.NetIO}}"` line
    pub fn parse_stats_line(line: &str) -> Option<Self> {
        let mut fields = line.trim().split(Self::SEPARATOR).map(str::trim);
        let name = fields.next().filter(|n| !n.is_empty())?.to_string();
        Some(Self {
            name,
            cpu: fields.next()?.to_string(),
            memory: fields.next()?.to_string(),
            network: fields.next()?.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub name: String,
    pub active: bool,
    pub enabled: bool,
    pub failed: bool,
    pub containers: Vec<ContainerInfo>,
}

impl ServiceStatus {
    pub fn inactive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: false,
            enabled: false,
            failed: false,
            containers: Vec::new(),
        }
    }
}
