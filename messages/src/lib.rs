//! Wire-level vote envelope for replica-to-replica vote traffic.
//!
//! Every vote travels over the host's broadcast medium as a small JSON
//! object: `{"type":"vote","election":"<id>","data":<payload>}`. The `type`
//! tag distinguishes vote traffic from everything else the host broadcasts
//! on the same channel; the payload is arbitrary structured data and nests
//! under `data`, so caller fields can never collide with the tag key.
//!
//! Decoding is deliberately forgiving: bytes that are not a well-formed
//! envelope, or that carry a different tag, yield `None` ("not a vote") and
//! are dropped upstream without error.

use plenum_types::ElectionId;
use serde::{Deserialize, Serialize};

/// Value of the `type` tag marking an envelope as vote traffic.
pub const VOTE_TYPE_TAG: &str = "vote";

/// One vote envelope as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoteEnvelope {
    /// Constant marker; must equal [`VOTE_TYPE_TAG`] for the envelope to be
    /// admitted as a vote.
    #[serde(rename = "type")]
    kind: String,
    /// The election this vote belongs to.
    pub election: ElectionId,
    /// Caller payload, opaque to the engine.
    pub data: serde_json::Value,
}

impl VoteEnvelope {
    /// Build an envelope for one vote in the given election.
    pub fn new(election: ElectionId, data: serde_json::Value) -> Self {
        Self {
            kind: VOTE_TYPE_TAG.to_string(),
            election,
            data,
        }
    }

    /// Serialize the envelope to wire bytes.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Parse wire bytes as a vote envelope.
    ///
    /// Returns `None` for anything that is not structurally a vote: invalid
    /// JSON, missing fields, wrong field types, or a mismatched `type` tag.
    /// Never panics and never surfaces a parse error.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let envelope: Self = serde_json::from_slice(bytes).ok()?;
        if envelope.kind == VOTE_TYPE_TAG {
            Some(envelope)
        } else {
            None
        }
    }
}
