//! Owned, single-writer store for the current fixture set.
//!
//! The store hands out immutable [`FeedSnapshot`]s behind an `Arc`; a load
//! replaces the snapshot pointer in one step so readers never see a
//! half-updated collection. Every load carries a [`FetchTicket`] taken when it
//! was dispatched, and a load only lands if its ticket is newer than the one
//! already applied.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::data_fetcher::models::Fixture;
use crate::data_fetcher::processors::{Reconciliation, TimeProjection, reconcile_with_projection};
use crate::error::{AppError, FailureKind};

/// Where the current fixture set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedSource {
    Bundled,
    Remote,
}

/// Sequence number of a dispatched load. Later dispatches get larger tickets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One reconciled fixture set.
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    pub fixtures: Vec<Fixture>,
    pub reconciliation: Reconciliation,
    pub source: Option<FeedSource>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub ticket: FetchTicket,
}

impl FeedSnapshot {
    fn empty() -> Self {
        Self {
            fixtures: Vec::new(),
            reconciliation: Reconciliation::default(),
            source: None,
            loaded_at: None,
            ticket: FetchTicket(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Looks a fixture up by its (date, opponent) identity.
    pub fn find(&self, date: &str, opponent: &str) -> Option<&Fixture> {
        self.fixtures
            .iter()
            .find(|f| f.date == date && f.opponent == opponent)
    }

    /// All fixtures on a date, in feed order.
    pub fn on_date(&self, date: &str) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|f| f.date == date).collect()
    }

    /// Fixtures sorted by date for the schedule list. Ties keep feed order.
    pub fn schedule(&self) -> Vec<&Fixture> {
        let mut fixtures: Vec<&Fixture> = self.fixtures.iter().collect();
        fixtures.sort_by(|a, b| a.date.cmp(&b.date));
        fixtures
    }
}

/// A refresh that failed after the last successful load.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    #[serde(skip)]
    pub kind: FailureKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Freshness of the data currently shown.
#[derive(Debug, Clone, Serialize)]
pub struct FeedStatus {
    pub source: Option<FeedSource>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub fixture_count: usize,
    pub last_failure: Option<FailureRecord>,
}

impl FeedStatus {
    /// True unless the shown data came from the remote feed and no later refresh failed.
    pub fn is_stale(&self) -> bool {
        self.source != Some(FeedSource::Remote) || self.last_failure.is_some()
    }
}

/// Result of handing a decoded fixture set to the store.
#[derive(Debug, Clone)]
pub enum ApplyOutcome {
    Applied(Arc<FeedSnapshot>),
    /// A load dispatched later has already been applied.
    Stale,
}

struct StoreState {
    snapshot: Arc<FeedSnapshot>,
    last_failure: Option<FailureRecord>,
}

pub struct FixtureStore {
    state: RwLock<StoreState>,
    next_ticket: AtomicU64,
    projection: TimeProjection,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::with_projection(TimeProjection::default())
    }

    pub fn with_projection(projection: TimeProjection) -> Self {
        Self {
            state: RwLock::new(StoreState {
                snapshot: Arc::new(FeedSnapshot::empty()),
                last_failure: None,
            }),
            next_ticket: AtomicU64::new(0),
            projection,
        }
    }

    pub fn projection(&self) -> &TimeProjection {
        &self.projection
    }

    /// Takes the ticket for a load about to be dispatched.
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Current snapshot. Cheap; clones an `Arc`.
    pub async fn snapshot(&self) -> Arc<FeedSnapshot> {
        Arc::clone(&self.state.read().await.snapshot)
    }

    /// Replaces the fixture set wholesale if `ticket` is newer than the applied one.
    #[instrument(skip(self, fixtures), fields(count = fixtures.len()))]
    pub async fn apply(
        &self,
        ticket: FetchTicket,
        source: FeedSource,
        fixtures: Vec<Fixture>,
        now: DateTime<Utc>,
    ) -> ApplyOutcome {
        let reconciliation = reconcile_with_projection(&fixtures, now, &self.projection);
        let snapshot = Arc::new(FeedSnapshot {
            fixtures,
            reconciliation,
            source: Some(source),
            loaded_at: Some(now),
            ticket,
        });

        let mut state = self.state.write().await;
        if ticket <= state.snapshot.ticket {
            warn!(
                "Discarding {:?} load with ticket {}, ticket {} already applied",
                source,
                ticket.value(),
                state.snapshot.ticket.value()
            );
            return ApplyOutcome::Stale;
        }

        state.snapshot = Arc::clone(&snapshot);
        state.last_failure = None;
        info!(
            "Applied {} fixtures from {:?} (ticket {})",
            snapshot.fixtures.len(),
            source,
            ticket.value()
        );
        ApplyOutcome::Applied(snapshot)
    }

    /// Remembers a failed load so the caller can flag the data as stale.
    /// Failures of loads older than the applied snapshot are ignored.
    pub async fn record_failure(&self, ticket: FetchTicket, error: &AppError, now: DateTime<Utc>) {
        let mut state = self.state.write().await;
        if ticket <= state.snapshot.ticket {
            debug!(
                "Ignoring failure of superseded load {}: {}",
                ticket.value(),
                error
            );
            return;
        }
        state.last_failure = Some(FailureRecord {
            kind: error.failure_kind(),
            message: error.to_string(),
            at: now,
        });
    }

    pub async fn status(&self) -> FeedStatus {
        let state = self.state.read().await;
        FeedStatus {
            source: state.snapshot.source,
            loaded_at: state.snapshot.loaded_at,
            fixture_count: state.snapshot.fixtures.len(),
            last_failure: state.last_failure.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{FixtureBuilder, sample_season};

    #[tokio::test]
    async fn test_starts_empty() {
        let store = FixtureStore::new();
        let snapshot = store.snapshot().await;
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.source, None);
        assert_eq!(snapshot.reconciliation.default_selected_index(), 1);
        assert!(store.status().await.is_stale());
    }

    #[tokio::test]
    async fn test_tickets_increase() {
        let store = FixtureStore::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();
        assert!(second > first);
        assert_eq!(first.value(), 1);
    }

    #[tokio::test]
    async fn test_apply_replaces_wholesale() {
        let store = FixtureStore::new();
        let ticket = store.begin_fetch();
        store
            .apply(ticket, FeedSource::Bundled, sample_season(), Utc::now())
            .await;
        assert_eq!(store.snapshot().await.fixtures.len(), 7);

        let ticket = store.begin_fetch();
        let replacement = vec![FixtureBuilder::new("2026-01-20", "Inter Milan").build()];
        let outcome = store
            .apply(ticket, FeedSource::Remote, replacement, Utc::now())
            .await;

        assert!(matches!(outcome, ApplyOutcome::Applied(_)));
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.fixtures.len(), 1);
        assert_eq!(snapshot.source, Some(FeedSource::Remote));
        assert!(!store.status().await.is_stale());
    }

    #[tokio::test]
    async fn test_older_ticket_is_stale() {
        let store = FixtureStore::new();
        let older = store.begin_fetch();
        let newer = store.begin_fetch();

        store
            .apply(newer, FeedSource::Remote, sample_season(), Utc::now())
            .await;
        let outcome = store
            .apply(older, FeedSource::Remote, Vec::new(), Utc::now())
            .await;

        assert!(matches!(outcome, ApplyOutcome::Stale));
        assert_eq!(store.snapshot().await.fixtures.len(), 7);
    }

    #[tokio::test]
    async fn test_readers_keep_their_snapshot() {
        let store = FixtureStore::new();
        let ticket = store.begin_fetch();
        store
            .apply(ticket, FeedSource::Bundled, sample_season(), Utc::now())
            .await;
        let held = store.snapshot().await;

        let ticket = store.begin_fetch();
        store
            .apply(ticket, FeedSource::Remote, Vec::new(), Utc::now())
            .await;

        assert_eq!(held.fixtures.len(), 7);
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_recorded_and_cleared() {
        let store = FixtureStore::new();
        let bundled = store.begin_fetch();
        store
            .apply(bundled, FeedSource::Bundled, sample_season(), Utc::now())
            .await;

        let remote = store.begin_fetch();
        let error = AppError::network_timeout("https://feed.example.com");
        store.record_failure(remote, &error, Utc::now()).await;

        let status = store.status().await;
        let failure = status.last_failure.clone().unwrap();
        assert_eq!(failure.kind, FailureKind::Transport);
        assert!(status.is_stale());

        let retry = store.begin_fetch();
        store
            .apply(retry, FeedSource::Remote, sample_season(), Utc::now())
            .await;
        assert!(store.status().await.last_failure.is_none());
    }

    #[tokio::test]
    async fn test_superseded_failure_is_ignored() {
        let store = FixtureStore::new();
        let older = store.begin_fetch();
        let newer = store.begin_fetch();
        store
            .apply(newer, FeedSource::Remote, sample_season(), Utc::now())
            .await;

        store
            .record_failure(older, &AppError::api_not_found("u"), Utc::now())
            .await;
        assert!(store.status().await.last_failure.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_lookup() {
        let store = FixtureStore::new();
        let ticket = store.begin_fetch();
        store
            .apply(ticket, FeedSource::Bundled, sample_season(), Utc::now())
            .await;
        let snapshot = store.snapshot().await;

        assert!(snapshot.find("2025-08-23", "Leeds United").is_some());
        assert!(snapshot.find("2025-08-23", "Liverpool").is_none());
        assert_eq!(snapshot.on_date("2025-08-31").len(), 1);

        let dates: Vec<_> = snapshot.schedule().iter().map(|f| f.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}
