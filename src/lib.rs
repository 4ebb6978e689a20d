//! RedLens: Arsenal fixtures, results and spoiler-free replay links
//!
//! This library loads the season's fixture feed (a bundled snapshot first,
//! then the remote document), reconciles it into the home-view state, projects
//! London kick-off times into Beijing time and drives the spoiler confirmation
//! before a replay link is opened.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use redlens::data_fetcher::{FeedLoader, FeedSync, FixtureStore, RefreshOutcome};
//! use redlens::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let store = Arc::new(FixtureStore::new());
//!     let sync = FeedSync::new(FeedLoader::from_config(&config)?, Arc::clone(&store));
//!
//!     // Bundled data is in place once this returns; the refresh runs in the background.
//!     let refresh = sync.initialize().await;
//!     if let Ok(RefreshOutcome::Failed(e)) = refresh.await {
//!         eprintln!("showing bundled data: {e}");
//!     }
//!
//!     let snapshot = store.snapshot().await;
//!     if let Some(next) = &snapshot.reconciliation.next_upcoming {
//!         println!("{} vs {} at {}", next.home_team_name(), next.away_team_name(), next.local_time());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod playback;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Fixture, FixtureView, MatchStatus};
pub use data_fetcher::processors::{Reconciliation, reconcile, to_target_local};
pub use data_fetcher::store::{FeedSnapshot, FeedStatus, FixtureStore};
pub use data_fetcher::teams::translate_team;
pub use error::AppError;
pub use playback::{NavigationTarget, PendingPlayback, PlaybackRequest, request_playback};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
