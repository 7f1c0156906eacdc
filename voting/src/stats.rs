//! Engine counters for host metrics export.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Running counters maintained by a [`crate::VoteContext`].
///
/// The counter set is closed, so these are plain named atomics rather than a
/// string-keyed registry. Hosts export them by polling
/// [`VotingStats::snapshot`].
#[derive(Debug, Default)]
pub struct VotingStats {
    votes_cast: AtomicU64,
    votes_received: AtomicU64,
    votes_ignored: AtomicU64,
    elections_resolved: AtomicU64,
    elections_timed_out: AtomicU64,
}

/// Point-in-time copy of the engine counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Envelopes this replica queued for broadcast.
    pub votes_cast: u64,
    /// Envelopes admitted into the accumulator.
    pub votes_received: u64,
    /// Inbound frames dropped as "not a vote".
    pub votes_ignored: u64,
    /// Elections settled by policy satisfaction.
    pub elections_resolved: u64,
    /// Elections settled by deadline expiry.
    pub elections_timed_out: u64,
}

impl VotingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_vote_cast(&self) {
        self.votes_cast.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_vote_received(&self) {
        self.votes_received.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_vote_ignored(&self) {
        self.votes_ignored.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_resolved(&self) {
        self.elections_resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_timed_out(&self) {
        self.elections_timed_out.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the current counter values.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            votes_cast: self.votes_cast.load(Ordering::Relaxed),
            votes_received: self.votes_received.load(Ordering::Relaxed),
            votes_ignored: self.votes_ignored.load(Ordering::Relaxed),
            elections_resolved: self.elections_resolved.load(Ordering::Relaxed),
            elections_timed_out: self.elections_timed_out.load(Ordering::Relaxed),
        }
    }
}
