pub mod bundled;
mod fetch_utils;
pub mod http_client;
pub mod loader;
pub mod orchestrator;

pub use bundled::{BundledFeed, EMBEDDED_FEED};
pub use http_client::create_http_client_with_timeout;
pub use loader::FeedLoader;
pub use orchestrator::{FeedSync, RefreshOutcome};
