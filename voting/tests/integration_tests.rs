//! Integration tests exercising the full voting pipeline across several
//! replica contexts: cast → broadcast → echo → feed → accumulate → notify →
//! resolve → reduce.
//!
//! A loopback hub stands in for the host's broadcast medium: every frame a
//! context queues outbound is delivered to every context, the sender
//! included, exactly as a consensus-ordered broadcast does.

use plenum_types::ReplicaId;
use plenum_voting::{decision, Elector, SignerTable, VoteBroadcaster, VoteContext, VotingConfig};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const LONG: Duration = Duration::from_secs(5);
const SHORT: Duration = Duration::from_millis(80);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Wire one context per name to a loopback hub.
fn cluster(names: &[&str]) -> Vec<(ReplicaId, Arc<VoteContext>)> {
    let config = VotingConfig::default();

    let mut contexts: Vec<(ReplicaId, Arc<VoteContext>)> = Vec::new();
    let mut outbounds = Vec::new();
    for name in names {
        let (broadcaster, rx) = VoteBroadcaster::channel(config.outbound_capacity);
        contexts.push((
            ReplicaId::new(*name),
            Arc::new(VoteContext::new(broadcaster)),
        ));
        outbounds.push(rx);
    }

    for ((sender, _), mut rx) in contexts.iter().cloned().zip(outbounds) {
        let peers = contexts.clone();
        tokio::spawn(async move {
            while let Some(frame) = rx.recv().await {
                for (_, peer) in &peers {
                    peer.feed_incoming(sender.clone(), &frame).await;
                }
            }
        });
    }

    contexts
}

fn signer_table(entries: &[(&str, u64)]) -> SignerTable {
    entries
        .iter()
        .map(|(name, weight)| (ReplicaId::new(*name), *weight))
        .collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn three_replicas_agree_on_minimum_sequence_number() {
    let cluster = cluster(&["r1", "r2", "r3"]);
    let (_, r1) = &cluster[0];
    let (_, r2) = &cluster[1];
    let (_, r3) = &cluster[2];

    // Each replica proposes its local view of the next usable sequence
    // number; r3 is one ahead of the others.
    let (d1, d2, d3) = ([json!(10)], [json!(10)], [json!(11)]);
    let (v1, v2, v3) = tokio::join!(
        r1.vote("seq0", &d1, Elector::count(3, LONG)),
        r2.vote("seq0", &d2, Elector::count(3, LONG)),
        r3.vote("seq0", &d3, Elector::count(3, LONG)),
    );

    for result in [v1.unwrap(), v2.unwrap(), v3.unwrap()] {
        assert_eq!(result.len(), 3);
        // Arrival order differs per replica; the reduction does not.
        assert_eq!(decision::min_integer(&result), Some(10));
    }
}

#[tokio::test]
async fn under_quorum_weighted_election_times_out_with_partial_votes() {
    let cluster = cluster(&["x", "y"]);
    let (_, x) = &cluster[0];
    let (_, y) = &cluster[1];
    let signers = signer_table(&[("x", 1), ("y", 1)]);

    // Only x casts a signature; y observes. Weight 1 < quorum 2, so both
    // replicas get exactly x's vote at the deadline and must treat the
    // result as "quorum not met".
    let dx = [json!("sig_x")];
    let (vx, vy) = tokio::join!(
        x.vote(
            "sig0",
            &dx,
            Elector::weighted(2, signers.clone(), SHORT)
        ),
        y.subscribe("sig0", Elector::weighted(2, signers.clone(), SHORT)),
    );

    let vx = vx.unwrap();
    assert_eq!(vx.len(), 1);
    assert_eq!(vx[0].voter, ReplicaId::new("x"));
    assert_eq!(vx[0].data, json!("sig_x"));

    assert_eq!(vy.len(), 1);
    assert_eq!(vy[0].data, json!("sig_x"));

    assert_eq!(x.stats().elections_timed_out, 1);
    assert_eq!(y.stats().elections_timed_out, 1);
}

#[tokio::test]
async fn full_weighted_quorum_assembles_every_partial_signature() {
    let cluster = cluster(&["a", "b", "c"]);
    let signers = signer_table(&[("a", 1), ("b", 1), ("c", 1)]);

    let (da, db, dc) = ([json!("part_a")], [json!("part_b")], [json!("part_c")]);
    let results = tokio::join!(
        cluster[0]
            .1
            .vote("multisig", &da, Elector::weighted(3, signers.clone(), LONG)),
        cluster[1]
            .1
            .vote("multisig", &db, Elector::weighted(3, signers.clone(), LONG)),
        cluster[2]
            .1
            .vote("multisig", &dc, Elector::weighted(3, signers.clone(), LONG)),
    );

    for result in [results.0.unwrap(), results.1.unwrap(), results.2.unwrap()] {
        assert_eq!(result.len(), 3);
        let mut parts: Vec<&str> = result.iter().filter_map(|v| v.data.as_str()).collect();
        parts.sort_unstable();
        assert_eq!(parts, vec!["part_a", "part_b", "part_c"]);
    }
}

#[tokio::test]
async fn replicas_agree_on_lexicographically_first_identifier() {
    let cluster = cluster(&["r1", "r2"]);

    let (d1, d2) = ([json!("b3f1-77")], [json!("a0c9-41")]);
    let (v1, v2) = tokio::join!(
        cluster[0]
            .1
            .vote("uuid0", &d1, Elector::count(2, LONG)),
        cluster[1]
            .1
            .vote("uuid0", &d2, Elector::count(2, LONG)),
    );

    let v1 = v1.unwrap();
    let v2 = v2.unwrap();
    assert_eq!(decision::lexicographic_first(&v1), Some("a0c9-41"));
    assert_eq!(decision::lexicographic_first(&v2), Some("a0c9-41"));
}

#[tokio::test]
async fn concurrent_topics_stay_isolated_across_the_hub() {
    let cluster = cluster(&["r1", "r2"]);
    let (_, r1) = &cluster[0];
    let (_, r2) = &cluster[1];

    let (ds1, dr1, ds2, dr2) = (
        [json!(4)],
        [json!("r1-beef")],
        [json!(6)],
        [json!("r2-cafe")],
    );
    let (seq1, rnd1, seq2, rnd2) = tokio::join!(
        r1.vote("seq", &ds1, Elector::count(2, LONG)),
        r1.vote("rnd", &dr1, Elector::count(2, LONG)),
        r2.vote("seq", &ds2, Elector::count(2, LONG)),
        r2.vote("rnd", &dr2, Elector::count(2, LONG)),
    );

    for result in [seq1.unwrap(), seq2.unwrap()] {
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.data.is_i64()));
        assert_eq!(decision::min_integer(&result), Some(4));
    }
    for result in [rnd1.unwrap(), rnd2.unwrap()] {
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.data.is_string()));
    }
}

#[tokio::test]
async fn foreign_broadcast_traffic_does_not_disturb_elections() {
    let cluster = cluster(&["r1", "r2"]);
    let (_, r1) = &cluster[0];
    let (_, r2) = &cluster[1];

    // Other subsystems share the broadcast medium; their frames reach the
    // same feed path and must be ignored.
    let noise = serde_json::to_vec(&json!({"type": "ledger_sync", "height": 88})).unwrap();
    r1.feed_incoming(ReplicaId::new("r2"), &noise).await;
    r1.feed_incoming(ReplicaId::new("r2"), b"raw garbage").await;

    let (d1, d2) = ([json!(1)], [json!(2)]);
    let (v1, v2) = tokio::join!(
        r1.vote("seq", &d1, Elector::count(2, LONG)),
        r2.vote("seq", &d2, Elector::count(2, LONG)),
    );

    assert_eq!(v1.unwrap().len(), 2);
    assert_eq!(v2.unwrap().len(), 2);
    assert_eq!(r1.stats().votes_ignored, 2);
    assert_eq!(r1.stats().votes_received, 2);
}
