//! Voting context: the public face of the engine.
//!
//! A [`VoteContext`] owns the accumulator, the notifier and the per-topic
//! identifier serials for one replica process. It composes them with the
//! envelope codec and a caller-supplied [`Elector`] to run elections:
//!
//! - [`VoteContext::vote`] casts one or more values and awaits resolution.
//! - [`VoteContext::subscribe`] awaits resolution without casting.
//! - [`VoteContext::feed_incoming`] is the single inbound path; the host
//!   calls it for every broadcast message it delivers, the replica's own
//!   included.
//!
//! Casting never appends locally. The broadcast medium echoes every message
//! back to its sender, so a replica's own vote is counted once, when it
//! arrives through `feed_incoming` like everyone else's. All state is owned
//! by the context instance; several contexts coexist in one process (each
//! standing in for one replica in tests).

use crate::accumulator::{CollectedVote, VoteAccumulator};
use crate::broadcast::VoteBroadcaster;
use crate::elector::Elector;
use crate::error::VotingError;
use crate::notifier::{ElectionNotifier, Subscription};
use crate::stats::{StatsSnapshot, VotingStats};
use plenum_messages::VoteEnvelope;
use plenum_types::{ElectionId, ReplicaId};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, trace};

/// Mutable engine state, guarded by one lock.
///
/// The lock is never held across an await point: appends (including the
/// notifier firing) complete in full before the next inbound message is
/// processed, which the policies rely on.
struct EngineState {
    accumulator: VoteAccumulator,
    notifier: ElectionNotifier,
    serials: HashMap<String, u64>,
}

/// Per-replica orchestrator for replicated voting.
pub struct VoteContext {
    state: Mutex<EngineState>,
    broadcaster: VoteBroadcaster,
    stats: VotingStats,
}

impl VoteContext {
    /// Create a context that queues outbound envelopes on `broadcaster`.
    pub fn new(broadcaster: VoteBroadcaster) -> Self {
        Self {
            state: Mutex::new(EngineState {
                accumulator: VoteAccumulator::new(),
                notifier: ElectionNotifier::new(),
                serials: HashMap::new(),
            }),
            broadcaster,
            stats: VotingStats::new(),
        }
    }

    /// Next identifier for `topic`: `topic/serial` with a per-topic
    /// monotonic serial starting at 0.
    ///
    /// Deterministic by construction. Replicas that execute the same logical
    /// steps in the same order produce the same identifiers, which is what
    /// correlates their independent local elections. Identifiers never
    /// repeat within a process lifetime for a given topic.
    pub async fn next_election_id(&self, topic: &str) -> ElectionId {
        let mut state = self.state.lock().await;
        let serial = state.serials.entry(topic.to_string()).or_insert(0);
        let election = ElectionId::compose(topic, *serial);
        *serial += 1;
        election
    }

    /// Cast `values` under a fresh identifier for `topic` and await
    /// resolution.
    pub async fn vote(
        &self,
        topic: &str,
        values: &[serde_json::Value],
        elector: Elector,
    ) -> Result<Vec<CollectedVote>, VotingError> {
        let election = self.next_election_id(topic).await;
        self.vote_for(election, values, elector).await
    }

    /// Cast `values` under a caller-supplied identifier and await
    /// resolution.
    ///
    /// For callers that deliberately reuse an identifier after a previous
    /// election under it has drained. Reusing an identifier while it is
    /// still in flight is a caller bug with unspecified results.
    pub async fn vote_for(
        &self,
        election: ElectionId,
        values: &[serde_json::Value],
        elector: Elector,
    ) -> Result<Vec<CollectedVote>, VotingError> {
        // Subscribe before broadcasting so an echo that comes back
        // immediately cannot be missed.
        let (subscription, initial) = self.begin(&election).await;

        let broadcast = async {
            for value in values {
                let envelope = VoteEnvelope::new(election.clone(), value.clone());
                let bytes = envelope.encode()?;
                self.broadcaster.send(bytes).await?;
                self.stats.record_vote_cast();
            }
            Ok::<(), VotingError>(())
        }
        .await;

        if let Err(err) = broadcast {
            self.state.lock().await.notifier.unsubscribe(&election);
            return Err(err);
        }

        trace!(election = %election, cast = values.len(), "votes queued, awaiting resolution");
        Ok(self.resolve(election, elector, subscription, initial).await)
    }

    /// Await resolution of a fresh election for `topic` without casting.
    ///
    /// Still advances the topic serial, so an observing replica stays in
    /// step with the voting ones.
    pub async fn subscribe(&self, topic: &str, elector: Elector) -> Vec<CollectedVote> {
        let election = self.next_election_id(topic).await;
        self.subscribe_to(election, elector).await
    }

    /// Await resolution of an election under a caller-supplied identifier
    /// without casting.
    pub async fn subscribe_to(
        &self,
        election: ElectionId,
        elector: Elector,
    ) -> Vec<CollectedVote> {
        let (subscription, initial) = self.begin(&election).await;
        self.resolve(election, elector, subscription, initial).await
    }

    /// Feed one broadcast message into the engine.
    ///
    /// The host calls this for every message its broadcast medium delivers.
    /// Frames that do not decode as vote envelopes are dropped without
    /// error. Admitted votes are appended and the election's waiter, if
    /// any, is notified before this call returns.
    pub async fn feed_incoming(&self, sender: ReplicaId, bytes: &[u8]) {
        let Some(envelope) = VoteEnvelope::decode(bytes) else {
            self.stats.record_vote_ignored();
            trace!(sender = %sender, len = bytes.len(), "ignoring non-vote broadcast");
            return;
        };

        let election = envelope.election;
        {
            let mut state = self.state.lock().await;
            let snapshot = state.accumulator.append(&election, sender.clone(), envelope.data);
            state.notifier.notify(&election, snapshot);
        }
        self.stats.record_vote_received();
        trace!(sender = %sender, election = %election, "vote admitted");
    }

    /// Votes currently accumulated for an election, without removing them.
    pub async fn pending_votes(&self, election: &ElectionId) -> Vec<CollectedVote> {
        self.state.lock().await.accumulator.snapshot(election)
    }

    /// Current engine counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Open the wake channel and capture votes that arrived before this
    /// election began (faster replicas may already have broadcast theirs).
    async fn begin(&self, election: &ElectionId) -> (Subscription, Vec<CollectedVote>) {
        let mut state = self.state.lock().await;
        let subscription = state.notifier.subscribe(election);
        let initial = state.accumulator.snapshot(election);
        (subscription, initial)
    }

    /// Drive one election from WAITING to RESOLVED.
    ///
    /// The first of {policy satisfaction, deadline} wins. The losing path is
    /// cancelled structurally: the timeout future is dropped on early
    /// satisfaction, and the subscription is closed on deadline expiry, so
    /// no stray timer or waiter can outlive the election and touch a later
    /// reuse of its identifier. Either way the accumulator entry is drained
    /// exactly once and the result, possibly partial or empty, is returned.
    async fn resolve(
        &self,
        election: ElectionId,
        elector: Elector,
        mut subscription: Subscription,
        initial: Vec<CollectedVote>,
    ) -> Vec<CollectedVote> {
        let satisfied = if elector.is_satisfied(&initial) {
            true
        } else {
            tokio::time::timeout(elector.timeout(), async {
                while let Some(snapshot) = subscription.updated().await {
                    if elector.is_satisfied(&snapshot) {
                        return true;
                    }
                }
                false
            })
            .await
            .unwrap_or(false)
        };

        let votes = {
            let mut state = self.state.lock().await;
            state.notifier.unsubscribe(&election);
            state.accumulator.drain(&election)
        };

        if satisfied {
            self.stats.record_resolved();
            debug!(election = %election, votes = votes.len(), "election resolved by policy");
        } else {
            self.stats.record_timed_out();
            debug!(election = %election, votes = votes.len(), "election timed out");
        }
        votes
    }
}
