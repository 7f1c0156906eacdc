//! Replica identity as seen on the broadcast channel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of one replica in the closed peer set.
///
/// This is whatever the host's broadcast medium reports as the sender of a
/// message: a public key string, a node name, a UNL entry. The engine treats
/// it as opaque. The weighted quorum policy also uses it as the signer key,
/// since in a closed peer set the replica key is the signing account.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplicaId(String);

impl ReplicaId {
    /// Create a replica identity from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ReplicaId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ReplicaId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
