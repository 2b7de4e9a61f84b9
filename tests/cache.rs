use avantage_rs::{Snapshot, SnapshotCache};
use chrono::NaiveDate;
use serde_json::{Map, Value};

fn d(iso: &str) -> NaiveDate {
    iso.parse().unwrap()
}

fn overview() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("Symbol".into(), Value::String("AAPL".into()));
    map.insert("PERatio".into(), Value::String("30.0".into()));
    map
}

#[tokio::test]
async fn put_then_get_roundtrips() {
    let cache = SnapshotCache::new();
    cache.put("AAPL", Snapshot::new(overview(), d("2024-01-10"))).await;

    let snapshot = cache.get("AAPL").await.unwrap();
    assert_eq!(snapshot.reference_date(), d("2024-01-10"));
    assert_eq!(snapshot.overview().get("PERatio"), Some(&Value::String("30.0".into())));
    assert_eq!(snapshot.latest_trading_day(), None);
}

#[tokio::test]
async fn validity_is_tied_to_the_reference_date() {
    let cache = SnapshotCache::new();
    cache.put("AAPL", Snapshot::new(overview(), d("2024-01-10"))).await;

    assert!(cache.is_valid("AAPL", d("2024-01-10")).await);
    assert!(!cache.is_valid("AAPL", d("2024-01-11")).await);
    assert!(!cache.is_valid("MSFT", d("2024-01-10")).await);

    assert!(cache.valid_overview("AAPL", d("2024-01-10")).await.is_some());
    assert!(cache.valid_overview("AAPL", d("2024-01-11")).await.is_none());
}

#[tokio::test]
async fn symbols_are_case_sensitive() {
    let cache = SnapshotCache::new();
    cache.put("AAPL", Snapshot::new(overview(), d("2024-01-10"))).await;

    assert!(cache.get("aapl").await.is_none());
}

#[tokio::test]
async fn overwrite_drops_the_resolved_trading_day() {
    let cache = SnapshotCache::new();
    cache.put("AAPL", Snapshot::new(overview(), d("2024-01-10"))).await;
    cache.set_latest_trading_day("AAPL", d("2024-01-10"), "2024-01-10").await;
    assert_eq!(
        cache.latest_trading_day("AAPL", d("2024-01-10")).await.as_deref(),
        Some("2024-01-10")
    );

    cache.put("AAPL", Snapshot::new(overview(), d("2024-01-11"))).await;
    assert!(cache.latest_trading_day("AAPL", d("2024-01-11")).await.is_none());
}

#[tokio::test]
async fn trading_day_writes_ignore_redated_entries() {
    let cache = SnapshotCache::new();
    cache.put("AAPL", Snapshot::new(overview(), d("2024-01-11"))).await;

    // Stamped for a different reference date: the write must not land.
    cache.set_latest_trading_day("AAPL", d("2024-01-10"), "2024-01-10").await;
    assert!(cache.latest_trading_day("AAPL", d("2024-01-11")).await.is_none());
}
