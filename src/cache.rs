//! Per-trading-day snapshot cache.
//!
//! The provider enforces a strict per-minute call quota, so the raw
//! company-overview document for each symbol is kept in memory and reused for
//! every indicator lookup within the same reference trading day.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// The raw company-overview document for one symbol, tagged with the
/// reference trading date it was fetched under.
///
/// Snapshots are owned by the [`SnapshotCache`] and replaced wholesale on
/// refetch; callers never mutate one in place.
#[derive(Debug, Clone)]
pub struct Snapshot {
    overview: Map<String, Value>,
    reference_date: NaiveDate,
    latest_trading_day: Option<String>,
}

impl Snapshot {
    /// A freshly fetched snapshot. The latest trading day starts unresolved
    /// and is filled in lazily, at most once per reference date.
    pub fn new(overview: Map<String, Value>, reference_date: NaiveDate) -> Self {
        Self {
            overview,
            reference_date,
            latest_trading_day: None,
        }
    }

    /// The raw overview document, keyed by indicator name.
    pub fn overview(&self) -> &Map<String, Value> {
        &self.overview
    }

    /// The reference trading date this snapshot was fetched under.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// The most recent trading day reported by the provider, if it has been
    /// resolved for this snapshot's reference date.
    pub fn latest_trading_day(&self) -> Option<&str> {
        self.latest_trading_day.as_deref()
    }
}

/// Process-wide mapping from symbol (case-sensitive, as supplied) to at most
/// one [`Snapshot`].
///
/// Unbounded and never evicted: the symbol universe is small and snapshots
/// are cheap, so stale entries simply get overwritten the next trading day.
/// Nothing is persisted across restarts.
///
/// Known limitation: there is no mutual exclusion beyond the `RwLock` around
/// the map itself. Concurrent callers missing on the same symbol may each hit
/// the network and overwrite each other, last writer wins. Acceptable under
/// the single-process, low-qps assumption this crate targets.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    inner: RwLock<HashMap<String, Snapshot>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached snapshot for `symbol`, whatever its age.
    pub async fn get(&self, symbol: &str) -> Option<Snapshot> {
        self.inner.read().await.get(symbol).cloned()
    }

    /// Unconditional overwrite. Any previously resolved trading day is
    /// dropped along with the stale entry.
    pub async fn put(&self, symbol: &str, snapshot: Snapshot) {
        self.inner.write().await.insert(symbol.to_string(), snapshot);
    }

    /// True iff an entry exists for `symbol` and was fetched under `as_of`.
    pub async fn is_valid(&self, symbol: &str, as_of: NaiveDate) -> bool {
        self.inner
            .read()
            .await
            .get(symbol)
            .is_some_and(|s| s.reference_date == as_of)
    }

    /// The overview document, only if the entry is still valid as of `as_of`.
    pub async fn valid_overview(
        &self,
        symbol: &str,
        as_of: NaiveDate,
    ) -> Option<Map<String, Value>> {
        self.inner
            .read()
            .await
            .get(symbol)
            .filter(|s| s.reference_date == as_of)
            .map(|s| s.overview.clone())
    }

    /// The resolved latest trading day, only if the entry is still valid as
    /// of `as_of`.
    pub async fn latest_trading_day(&self, symbol: &str, as_of: NaiveDate) -> Option<String> {
        self.inner
            .read()
            .await
            .get(symbol)
            .filter(|s| s.reference_date == as_of)
            .and_then(|s| s.latest_trading_day.clone())
    }

    /// Record the resolved trading day on the current entry. A no-op if the
    /// entry was replaced or re-dated in the meantime.
    pub async fn set_latest_trading_day(&self, symbol: &str, as_of: NaiveDate, day: &str) {
        let mut guard = self.inner.write().await;
        if let Some(snapshot) = guard
            .get_mut(symbol)
            .filter(|s| s.reference_date == as_of)
        {
            snapshot.latest_trading_day = Some(day.to_string());
        }
    }
}
