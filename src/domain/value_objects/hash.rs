//! Content Hash Value Object
//!
//! A content-addressed fingerprint of a unit definition file.
//! Used for drift detection between local and remote copies.

use std::fmt;

/// Content hash value object
///
/// Wraps a lowercase SHA-256 hex digest with the `sha256:` prefix, so local
/// hashes and hashes reported by the remote `sha256sum` compare directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a ContentHash from a hex digest (with or without prefix)
    pub fn new(raw_hash: &str) -> Self {
        let hex = raw_hash
            .strip_prefix(Self::PREFIX)
            .unwrap_or(raw_hash)
            .trim()
            .to_ascii_lowercase();
        Self(format!("{}{}", Self::PREFIX, hex))
    }

    /// Compute SHA-256 of raw file bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    /// Parse the first field of `sha256sum` output.
    ///
    /// Returns `None` for empty output (file missing or unreadable).
    pub fn from_sha256sum(output: &str) -> Option<Self> {
        let hex = output.split_whitespace().next()?;
        if hex.is_empty() {
            return None;
        }
        Some(Self::new(hex))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
