//! Election notifier: per-election wake channel between the inbound feed and
//! a waiting resolution policy.
//!
//! Each in-flight election gets its own `mpsc` channel. The feed side pushes
//! the post-append snapshot after every insert; the policy side receives the
//! snapshots in order and re-evaluates its satisfaction predicate on each.
//! The channel is unbounded so every append is observed exactly once, in
//! order, even if the policy task is momentarily behind.
//!
//! One subscriber per election identifier. Subscribing again for the same
//! identifier replaces the previous subscription (its channel closes), which
//! matches the drain-exactly-once caller contract: no two policy invocations
//! may legally share an identifier.

use crate::accumulator::CollectedVote;
use plenum_types::ElectionId;
use std::collections::HashMap;
use tokio::sync::mpsc;

/// The receiving half of one election's wake channel.
#[derive(Debug)]
pub struct Subscription {
    election: ElectionId,
    rx: mpsc::UnboundedReceiver<Vec<CollectedVote>>,
}

impl Subscription {
    /// Wait for the next post-append snapshot.
    ///
    /// Returns `None` once the sending side is gone (unsubscribed or
    /// replaced), which only happens outside the normal election lifecycle.
    pub async fn updated(&mut self) -> Option<Vec<CollectedVote>> {
        self.rx.recv().await
    }

    /// The election this subscription is scoped to.
    pub fn election(&self) -> &ElectionId {
        &self.election
    }
}

/// Registry of per-election wake channels.
#[derive(Debug, Default)]
pub struct ElectionNotifier {
    waiters: HashMap<ElectionId, mpsc::UnboundedSender<Vec<CollectedVote>>>,
}

impl ElectionNotifier {
    pub fn new() -> Self {
        Self {
            waiters: HashMap::new(),
        }
    }

    /// Open a wake channel scoped to one election.
    ///
    /// An existing subscription for the same identifier is replaced and its
    /// channel closes.
    pub fn subscribe(&mut self, election: &ElectionId) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.waiters.insert(election.clone(), tx);
        Subscription {
            election: election.clone(),
            rx,
        }
    }

    /// Deliver a snapshot to the subscriber for `election`, if any.
    ///
    /// A notification for one identifier never reaches a waiter registered
    /// for another. Dead subscriptions (receiver dropped without
    /// unsubscribing) are pruned on contact.
    pub fn notify(&mut self, election: &ElectionId, snapshot: Vec<CollectedVote>) {
        if let Some(tx) = self.waiters.get(election) {
            if tx.send(snapshot).is_err() {
                self.waiters.remove(election);
            }
        }
    }

    /// Close the wake channel for an election.
    pub fn unsubscribe(&mut self, election: &ElectionId) {
        self.waiters.remove(election);
    }

    /// Number of elections with an active subscriber.
    pub fn active(&self) -> usize {
        self.waiters.len()
    }
}
