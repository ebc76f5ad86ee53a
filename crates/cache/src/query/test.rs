use super::*;
use crate::MemSnapshotStore;

fn entry(peer: &str, score: f64) -> LeaderboardEntry {
    LeaderboardEntry {
        peer_id: peer.into(),
        round: 1,
        stage: 0,
        score,
    }
}

fn store_with_leaderboard(
    entries: Vec<LeaderboardEntry>,
) -> DynSnapshotStore {
    let store = MemSnapshotStore::create();
    store.publish(Snapshot {
        leaderboard: entries,
        gossip: GossipLog::default(),
        round: 1,
        stage: 0,
        refreshed_at: Timestamp::now(),
    });
    store
}

#[test]
fn leaderboard_of_empty_store_is_empty() {
    let store = MemSnapshotStore::create();
    assert!(leaderboard(&store).is_empty());
}

#[test]
fn leaderboard_of_single_entry() {
    let store = store_with_leaderboard(vec![entry("alice", 1.0)]);
    let ranked = leaderboard(&store);
    assert_eq!(1, ranked.len());
    assert_eq!(1, ranked[0].rank);
}

#[test]
fn leaderboard_sorts_score_desc_peer_id_asc() {
    let store = store_with_leaderboard(vec![
        entry("a", 10.0),
        entry("b", 30.0),
        entry("c", 30.0),
    ]);

    let ranked = leaderboard(&store);

    let order: Vec<(&str, usize)> = ranked
        .iter()
        .map(|e| (e.peer_id.as_str(), e.rank))
        .collect();
    assert_eq!(vec![("b", 1), ("c", 2), ("a", 3)], order);
}

#[test]
fn gossip_since_filters_and_preserves_order() {
    let store = MemSnapshotStore::create();
    let messages: Vec<GossipMessage> = (5..=7)
        .flat_map(|round| {
            (0..2).map(move |i| GossipMessage {
                round,
                stage: 0,
                peer_id: format!("p{i}"),
                message: "m".into(),
                timestamp: Timestamp::from_micros(round * 10 + i),
            })
        })
        .collect();
    store.publish(Snapshot {
        leaderboard: Vec::new(),
        gossip: GossipLog::from_messages(messages),
        round: 7,
        stage: 0,
        refreshed_at: Timestamp::now(),
    });

    // below the retention window: the full retained log
    assert_eq!(6, gossip_since(&store, 0).len());

    // inside the window
    let tail = gossip_since(&store, 6);
    assert_eq!(4, tail.len());
    assert!(tail.windows(2).all(|w| {
        (w[0].round, w[0].timestamp) <= (w[1].round, w[1].timestamp)
    }));

    // beyond the latest round
    assert!(gossip_since(&store, 8).is_empty());
}

#[test]
fn status_reflects_the_current_snapshot() {
    let store = MemSnapshotStore::create();

    let empty = status(&store);
    assert_eq!(-1, empty.round);
    assert_eq!(Timestamp::UNIX_EPOCH, empty.refreshed_at);
    assert_eq!(0, empty.peer_count);

    store.publish(Snapshot {
        leaderboard: vec![entry("alice", 1.0)],
        gossip: GossipLog::default(),
        round: 4,
        stage: 2,
        refreshed_at: Timestamp::from_micros(123),
    });

    let s = status(&store);
    assert_eq!(4, s.round);
    assert_eq!(2, s.stage);
    assert_eq!(1, s.peer_count);
    assert_eq!(123, s.refreshed_at.as_micros());
}
