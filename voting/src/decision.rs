//! Reducers for turning a resolved vote set into one agreed value.
//!
//! The engine returns every collected vote; consumers conventionally reduce
//! the set to a single value all replicas will agree on regardless of local
//! arrival order. The two stock conventions live here: minimum integer (e.g.
//! agreeing on the lowest usable transaction sequence number) and
//! lexicographically-first string (e.g. agreeing on one of many proposed
//! random identifiers).

use crate::accumulator::CollectedVote;

/// Smallest integer payload among the votes.
///
/// Votes whose payload is not an integer are skipped. Returns `None` when no
/// vote carries an integer, including the empty (timed-out) result.
pub fn min_integer(votes: &[CollectedVote]) -> Option<i64> {
    votes.iter().filter_map(|vote| vote.data.as_i64()).min()
}

/// Lexicographically-first string payload among the votes.
///
/// Votes whose payload is not a string are skipped. Returns `None` when no
/// vote carries a string.
pub fn lexicographic_first(votes: &[CollectedVote]) -> Option<&str> {
    votes.iter().filter_map(|vote| vote.data.as_str()).min()
}
