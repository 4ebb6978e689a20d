//! Load ordering between the bundled snapshot and the remote feed.

use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use super::loader::FeedLoader;
use crate::data_fetcher::store::{ApplyOutcome, FeedSnapshot, FeedSource, FixtureStore};
use crate::error::AppError;

/// What a remote refresh did to the store.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The remote fixture set replaced the previous one.
    Updated(Arc<FeedSnapshot>),
    /// The remote feed decoded, but a refresh dispatched later had already landed.
    Stale,
    /// The refresh failed; the previous fixture set is still in place.
    Failed(AppError),
}

impl RefreshOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RefreshOutcome::Updated(_))
    }
}

/// Drives the loader and applies its results to the store.
#[derive(Clone)]
pub struct FeedSync {
    loader: Arc<FeedLoader>,
    store: Arc<FixtureStore>,
}

impl FeedSync {
    pub fn new(loader: FeedLoader, store: Arc<FixtureStore>) -> Self {
        Self {
            loader: Arc::new(loader),
            store,
        }
    }

    pub fn store(&self) -> &Arc<FixtureStore> {
        &self.store
    }

    /// Applies the bundled snapshot. Returns false when there is none.
    #[instrument(skip(self))]
    pub async fn load_bundled(&self) -> bool {
        let ticket = self.store.begin_fetch();
        match self.loader.load_bundled() {
            Some(fixtures) => {
                let outcome = self
                    .store
                    .apply(ticket, FeedSource::Bundled, fixtures, Utc::now())
                    .await;
                matches!(outcome, ApplyOutcome::Applied(_))
            }
            None => false,
        }
    }

    /// Fetches the remote feed once and applies it if it is still the newest load.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshOutcome {
        let ticket = self.store.begin_fetch();
        match self.loader.fetch_remote().await {
            Ok(fixtures) => {
                match self
                    .store
                    .apply(ticket, FeedSource::Remote, fixtures, Utc::now())
                    .await
                {
                    ApplyOutcome::Applied(snapshot) => RefreshOutcome::Updated(snapshot),
                    ApplyOutcome::Stale => RefreshOutcome::Stale,
                }
            }
            Err(e) => {
                warn!(
                    "Remote refresh from {} failed ({:?}): {}",
                    self.loader.feed_url(),
                    e.failure_kind(),
                    e
                );
                self.store.record_failure(ticket, &e, Utc::now()).await;
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Applies the bundled snapshot, then dispatches the remote refresh in the
    /// background. The bundled load always completes before the fetch starts.
    pub async fn initialize(&self) -> JoinHandle<RefreshOutcome> {
        if !self.load_bundled().await {
            info!("No bundled snapshot, waiting for the remote feed");
        }
        let sync = self.clone();
        tokio::spawn(async move { sync.refresh().await })
    }
}
