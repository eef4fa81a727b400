//! Configuration loading

use std::fs;
use std::path::Path;

use crate::error::{HomelabError, HomelabResult};

use super::types::MachinesConfig;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the unknown key
    pub key: String,
    /// Full path of the key, e.g. `machines.nas.hostnme`
    pub path: String,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}'", self.path)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ", did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

impl MachinesConfig {
    /// Load and validate a machines file, discarding warnings
    pub fn load(path: &Path) -> HomelabResult<Self> {
        load_with_warnings(path).map(|(config, _)| config)
    }
}

/// Load and validate a machines file, collecting unknown keys as warnings.
pub fn load_with_warnings(path: &Path) -> HomelabResult<(MachinesConfig, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(HomelabError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    let (config, warnings) = parse_with_warnings(&content, path)?;
    config.validate(path)?;
    Ok((config, warnings))
}

/// Parse machines YAML without touching the filesystem
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> HomelabResult<(MachinesConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: MachinesConfig = if content.trim().is_empty() {
        MachinesConfig::default()
    } else {
        serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| HomelabError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                path: path_str,
            }
        })
        .collect();

    Ok((config, warnings))
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    let needle = format!("{}:", key);
    content
        .lines()
        .position(|line| line.trim_start().starts_with(&needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "machines",
        "hostname",
        "user",
        "description",
        "port",
        "services",
    ];

    CANDIDATES
        .iter()
        .map(|c| (*c, levenshtein(unknown, c)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(c, _)| c.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
