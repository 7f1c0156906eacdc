//! Outbound queue toward the host's broadcast medium.
//!
//! The engine does not own a transport. Encoded envelopes are pushed onto a
//! bounded `mpsc` channel that the host's connection layer drains and floods
//! to every replica, the local one included. A replica's own votes therefore
//! come back through the same inbound feed as everyone else's.

use crate::error::VotingError;
use tokio::sync::mpsc;

/// Queue-based handle to the host's broadcast medium.
#[derive(Clone, Debug)]
pub struct VoteBroadcaster {
    outbound_tx: mpsc::Sender<Vec<u8>>,
}

impl VoteBroadcaster {
    /// Wrap an existing outbound channel.
    pub fn new(outbound_tx: mpsc::Sender<Vec<u8>>) -> Self {
        Self { outbound_tx }
    }

    /// Create a broadcaster together with the receiving half the host's
    /// connection layer drains.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Vec<u8>>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    /// Queue one wire frame for broadcast.
    ///
    /// Waits for channel capacity; fails only if the host side has gone away.
    pub async fn send(&self, bytes: Vec<u8>) -> Result<(), VotingError> {
        self.outbound_tx
            .send(bytes)
            .await
            .map_err(|_| VotingError::BroadcastClosed)
    }
}
