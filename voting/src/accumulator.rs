//! Vote accumulator: per-process storage for in-flight elections.
//!
//! Each election identifier maps to the ordered sequence of votes received
//! for it so far, in arrival order. Arrival order is local to this replica;
//! the broadcast medium does not guarantee identical delivery order on every
//! node, so callers must not treat the sequence as globally deterministic.
//!
//! Entries live from the first vote arrival until they are drained, exactly
//! once, by the election that owns the identifier. Duplicate senders are kept
//! at face value; the engine performs no per-voter deduplication.

use plenum_types::{ElectionId, ReplicaId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One vote collected from the broadcast medium.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectedVote {
    /// Identity the broadcast medium reported as the sender.
    pub voter: ReplicaId,
    /// The vote payload, opaque to the engine.
    pub data: serde_json::Value,
}

/// Ordered vote storage keyed by election identifier.
#[derive(Debug, Default)]
pub struct VoteAccumulator {
    entries: HashMap<ElectionId, Vec<CollectedVote>>,
}

impl VoteAccumulator {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Append a vote at the tail of the entry for `election`, creating the
    /// entry if absent. Returns the post-append snapshot so the caller can
    /// hand it to the notifier before processing the next inbound message.
    pub fn append(
        &mut self,
        election: &ElectionId,
        voter: ReplicaId,
        data: serde_json::Value,
    ) -> Vec<CollectedVote> {
        let entry = self.entries.entry(election.clone()).or_default();
        entry.push(CollectedVote { voter, data });
        entry.clone()
    }

    /// Read the current votes for an election without removing them.
    pub fn snapshot(&self, election: &ElectionId) -> Vec<CollectedVote> {
        self.entries.get(election).cloned().unwrap_or_default()
    }

    /// Atomically return and remove the entry for an election.
    ///
    /// Returns an empty sequence for unknown identifiers, so a timed-out
    /// election that never received a vote drains cleanly. Idempotent: a
    /// second drain of the same identifier yields nothing.
    pub fn drain(&mut self, election: &ElectionId) -> Vec<CollectedVote> {
        self.entries.remove(election).unwrap_or_default()
    }

    /// Number of elections currently holding votes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no election currently holds votes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of votes held across all elections.
    pub fn total_votes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
