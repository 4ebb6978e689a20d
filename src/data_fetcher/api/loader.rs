//! The two fixture sources: the bundled snapshot and the remote feed.

use reqwest::Client;
use tracing::{info, instrument};

use super::bundled::BundledFeed;
use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use crate::config::Config;
use crate::data_fetcher::models::Fixture;
use crate::error::AppError;

/// Supplies raw fixture lists to the store.
#[derive(Debug, Clone)]
pub struct FeedLoader {
    client: Client,
    feed_url: String,
    bundled: BundledFeed,
}

impl FeedLoader {
    pub fn new(client: Client, feed_url: impl Into<String>, bundled: BundledFeed) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
            bundled,
        }
    }

    /// Builds a loader with a client honouring the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(
            client,
            config.feed_url.clone(),
            BundledFeed::from_path(config.bundled_feed_path.as_deref()),
        ))
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Reads the packaged snapshot. Absence or a decode failure gives `None`.
    pub fn load_bundled(&self) -> Option<Vec<Fixture>> {
        self.bundled.load()
    }

    /// Fetches the remote feed, bypassing any HTTP cache. Single attempt.
    #[instrument(skip(self), fields(url = %self.feed_url))]
    pub async fn fetch_remote(&self) -> Result<Vec<Fixture>, AppError> {
        let fixtures: Vec<Fixture> = fetch(&self.client, &self.feed_url).await?;
        info!("Remote feed returned {} fixtures", fixtures.len());
        Ok(fixtures)
    }
}
