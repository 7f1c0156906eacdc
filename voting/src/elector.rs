//! Resolution policies: when is an election settled, and with what?
//!
//! A policy starts in WAITING with a deadline. Each time the notifier hands
//! it a fresh snapshot it re-evaluates [`Elector::is_satisfied`]; the first
//! of {satisfaction, deadline} moves the election to RESOLVED and drains the
//! accumulator. The timeout path always terminates the election, possibly
//! with a partial or empty result, so no election blocks forever.
//!
//! Both variants use EXACT equality against their target, not
//! greater-or-equal. This assumes a closed, known-membership network where
//! each participant votes exactly once: a duplicate vote or an unexpectedly
//! heavy signer overshoots the target and the election then only terminates
//! at its deadline. Callers in adversarial settings should also note that
//! votes are not deduplicated by sender, so a retried sender inflates counts
//! and weights.

use crate::accumulator::CollectedVote;
use crate::signers::SignerTable;
use std::time::Duration;

/// Pluggable strategy deciding when an election's collected votes suffice.
///
/// A closed set of variants dispatched by the voting context; new policies
/// are added here, not as new types.
#[derive(Clone, Debug)]
pub enum Elector {
    /// Satisfied when exactly `desired` votes have accumulated.
    CountQuorum {
        desired: usize,
        timeout: Duration,
    },
    /// Satisfied when the summed signer weights of the accumulated votes
    /// equal `threshold` exactly. Votes from identities absent from the
    /// signer table contribute zero weight.
    WeightedQuorum {
        threshold: u64,
        signers: SignerTable,
        timeout: Duration,
    },
}

impl Elector {
    /// Count quorum: resolve once exactly `desired` votes are in.
    pub fn count(desired: usize, timeout: Duration) -> Self {
        Self::CountQuorum { desired, timeout }
    }

    /// Weighted signer quorum: resolve once the vote weights sum to
    /// `threshold` exactly.
    pub fn weighted(threshold: u64, signers: SignerTable, timeout: Duration) -> Self {
        Self::WeightedQuorum {
            threshold,
            signers,
            timeout,
        }
    }

    /// The deadline after which the election resolves with whatever has
    /// accumulated.
    pub fn timeout(&self) -> Duration {
        match self {
            Self::CountQuorum { timeout, .. } => *timeout,
            Self::WeightedQuorum { timeout, .. } => *timeout,
        }
    }

    /// Whether the snapshot settles the election ahead of the deadline.
    pub fn is_satisfied(&self, snapshot: &[CollectedVote]) -> bool {
        match self {
            Self::CountQuorum { desired, .. } => snapshot.len() == *desired,
            Self::WeightedQuorum {
                threshold, signers, ..
            } => {
                let total: u64 = snapshot
                    .iter()
                    .map(|vote| signers.weight(&vote.voter))
                    .sum();
                total == *threshold
            }
        }
    }
}
