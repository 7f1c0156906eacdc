//! Replicated voting and quorum resolution over a consensus-ordered
//! broadcast medium.
//!
//! Identically-programmed replicas agree on ad-hoc values (a random number,
//! a transaction sequence number, a set of partial signatures) by each
//! casting votes under a shared election identifier and accumulating the
//! votes every replica broadcasts, their own included, until a pluggable
//! policy declares the election settled or its deadline expires.
//!
//! ## Module overview
//!
//! - [`context`] - The [`VoteContext`] orchestrator: cast and await, feed
//!   inbound broadcasts, generate election identifiers.
//! - [`accumulator`] - Ordered per-election vote storage with destructive
//!   drain.
//! - [`notifier`] - Per-election wake channels between feed and policies.
//! - [`elector`] - Resolution policies: count quorum and weighted signer
//!   quorum, both exact-match.
//! - [`signers`] - Signer weight table for the weighted policy.
//! - [`broadcast`] - Outbound queue toward the host's broadcast medium.
//! - [`decision`] - Stock reducers from a resolved vote set to one value.
//! - [`config`] - Engine configuration with TOML support.
//! - [`logging`] - Tracing subscriber setup for embedders.
//! - [`stats`] - Engine counters for host metrics export.
//! - [`error`] - Engine error type.

pub mod accumulator;
pub mod broadcast;
pub mod config;
pub mod context;
pub mod decision;
pub mod elector;
pub mod error;
pub mod logging;
pub mod notifier;
pub mod signers;
pub mod stats;

pub use accumulator::{CollectedVote, VoteAccumulator};
pub use broadcast::VoteBroadcaster;
pub use config::VotingConfig;
pub use context::VoteContext;
pub use elector::Elector;
pub use error::VotingError;
pub use logging::{init_logging, LogFormat};
pub use notifier::{ElectionNotifier, Subscription};
pub use signers::SignerTable;
pub use stats::{StatsSnapshot, VotingStats};
