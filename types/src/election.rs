//! Election identifier type.
//!
//! An election identifier names one logical decision point within a process
//! lifetime. Every replica executing the same logical step must independently
//! produce the same identifier for its local election to correlate with the
//! votes the other replicas broadcast for that decision. Identifiers are
//! therefore composed from a caller-supplied topic and a monotonic serial,
//! never from wall-clock time or randomness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one logical decision point, unique per process lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElectionId(String);

impl ElectionId {
    /// Create an election identifier from a raw string.
    ///
    /// Prefer [`ElectionId::compose`]; raw construction exists for callers
    /// that deliberately reuse an identifier after it has been drained.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Compose an identifier from a topic and a monotonic serial: `topic/serial`.
    pub fn compose(topic: &str, serial: u64) -> Self {
        Self(format!("{topic}/{serial}"))
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ElectionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ElectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
