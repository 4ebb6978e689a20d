pub mod api;
pub mod models;
pub mod processors;
pub mod store;
pub mod teams;

pub use api::{BundledFeed, FeedLoader, FeedSync, RefreshOutcome};
pub use models::{Fixture, FixtureView, MatchStatus};
pub use processors::{HomeSlot, Reconciliation, reconcile, to_target_local};
pub use store::{FeedSnapshot, FeedSource, FeedStatus, FixtureStore};
pub use teams::translate_team;
