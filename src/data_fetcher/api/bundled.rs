//! Snapshot of the feed shipped with the application.

use std::path::PathBuf;
use tracing::{debug, warn};

use super::fetch_utils::decode_document;
use crate::data_fetcher::models::Fixture;
use crate::error::AppError;

/// Feed document compiled into the binary.
pub const EMBEDDED_FEED: &str = include_str!("../../../data/matches_with_videos.json");

/// Source of the bundled snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BundledFeed {
    /// The document compiled into the binary.
    #[default]
    Embedded,
    /// A document on disk, e.g. a package-managed copy.
    File(PathBuf),
    /// A document held in memory.
    Inline(String),
}

impl BundledFeed {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(path) => BundledFeed::File(PathBuf::from(path)),
            None => BundledFeed::Embedded,
        }
    }

    fn origin(&self) -> String {
        match self {
            BundledFeed::Embedded => "embedded snapshot".to_string(),
            BundledFeed::File(path) => path.display().to_string(),
            BundledFeed::Inline(_) => "inline snapshot".to_string(),
        }
    }

    /// Reads and decodes the snapshot.
    pub fn read(&self) -> Result<Vec<Fixture>, AppError> {
        let origin = self.origin();
        match self {
            BundledFeed::Embedded => decode_document(EMBEDDED_FEED, &origin),
            BundledFeed::Inline(document) => decode_document(document, &origin),
            BundledFeed::File(path) => {
                let document = std::fs::read_to_string(path).map_err(|e| {
                    AppError::bundled_feed(format!("cannot read {origin}: {e}"))
                })?;
                decode_document(&document, &origin)
            }
        }
    }

    /// Reads the snapshot, turning any failure into `None`.
    pub fn load(&self) -> Option<Vec<Fixture>> {
        match self.read() {
            Ok(fixtures) => {
                debug!("Loaded {} fixtures from {}", fixtures.len(), self.origin());
                Some(fixtures)
            }
            Err(e) => {
                warn!("Bundled feed unavailable: {e}");
                None
            }
        }
    }
}
