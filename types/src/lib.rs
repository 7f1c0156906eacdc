//! Fundamental types for the plenum voting engine.
//!
//! This crate defines the identifier types shared across every other crate in
//! the workspace: replica identities and election identifiers.

pub mod election;
pub mod replica;

pub use election::ElectionId;
pub use replica::ReplicaId;
