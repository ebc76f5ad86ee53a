use super::*;

#[tokio::test]
async fn store_then_get_round_trips() {
    let dht = MemDhtClient::default();

    dht.store(
        "k",
        bytes::Bytes::from_static(b"v"),
        std::time::Duration::from_secs(60),
    )
    .await
    .unwrap();

    assert_eq!(
        Some(bytes::Bytes::from_static(b"v")),
        dht.get("k").await.unwrap(),
    );
    assert_eq!(None, dht.get("missing").await.unwrap());
}

#[tokio::test]
async fn expired_records_read_as_absent() {
    let dht = MemDhtClient::default();

    dht.store(
        "k",
        bytes::Bytes::from_static(b"v"),
        std::time::Duration::from_millis(5),
    )
    .await
    .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    assert_eq!(None, dht.get("k").await.unwrap());
}

#[tokio::test]
async fn offline_fails_both_operations_and_keeps_records() {
    let dht = MemDhtClient::default();
    dht.insert_json("k", &7_u32).unwrap();

    dht.set_offline(true);
    assert!(dht.get("k").await.is_err());
    assert!(dht
        .store(
            "x",
            bytes::Bytes::from_static(b"v"),
            std::time::Duration::from_secs(1),
        )
        .await
        .is_err());

    dht.set_offline(false);
    let raw = dht.get("k").await.unwrap().unwrap();
    let decoded: u32 = serde_json::from_slice(&raw).unwrap();
    assert_eq!(7, decoded);
}
