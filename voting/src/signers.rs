//! Signer weight table for the weighted quorum policy.
//!
//! Maps a replica's identity to its integer voting weight. Supplied by the
//! caller per election, typically derived from the host network's membership
//! configuration. Identities absent from the table weigh zero; their votes
//! are effectively ignored by the weighted policy.

use plenum_types::ReplicaId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-supplied mapping from signer identity to voting weight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerTable {
    weights: HashMap<ReplicaId, u64>,
}

impl SignerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    /// Set a signer's weight. Replaces any previous weight for that signer.
    pub fn insert(&mut self, signer: ReplicaId, weight: u64) {
        self.weights.insert(signer, weight);
    }

    /// Remove a signer from the table.
    pub fn remove(&mut self, signer: &ReplicaId) {
        self.weights.remove(signer);
    }

    /// A signer's weight. Returns 0 for identities not in the table.
    pub fn weight(&self, signer: &ReplicaId) -> u64 {
        self.weights.get(signer).copied().unwrap_or(0)
    }

    /// Sum of all weights in the table.
    pub fn total_weight(&self) -> u64 {
        self.weights.values().sum()
    }

    /// Number of signers in the table.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table has no signers.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(ReplicaId, u64)> for SignerTable {
    fn from_iter<I: IntoIterator<Item = (ReplicaId, u64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
