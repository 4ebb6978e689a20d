//! Two-step playback protocol with a spoiler confirmation for finished fixtures.
//!
//! Rendering the confirmation is left to the caller; this module only decides
//! whether one is needed and what the navigation target is.

use reqwest::Url;
use std::fmt;
use tracing::debug;

use crate::data_fetcher::models::Fixture;

/// Title of the spoiler confirmation.
pub const SPOILER_TITLE: &str = "防剧透预警";
/// Body of the spoiler confirmation.
pub const SPOILER_MESSAGE: &str =
    "咪咕视频录像页顶部会直接显示比分。\n\n请在跳转前，准备好\n🖐️ 用手遮挡屏幕顶部 🖐️";
pub const SPOILER_CONFIRM_LABEL: &str = "我已准备好，跳转观看";
pub const SPOILER_CANCEL_LABEL: &str = "取消";

/// A deep link to hand to the host platform. The scheme is not checked.
///
/// The link is kept exactly as the feed wrote it; parsing only decides
/// whether it is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    link: String,
    url: Url,
}

impl NavigationTarget {
    /// Parses a deep link. Empty or unparseable links give `None`.
    pub fn parse(link: &str) -> Option<Self> {
        match Url::parse(link) {
            Ok(url) => Some(Self {
                link: link.to_string(),
                url,
            }),
            Err(e) => {
                if !link.is_empty() {
                    debug!("Unusable deep link {link:?}: {e}");
                }
                None
            }
        }
    }

    /// The parsed form, for inspecting the scheme or host.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        &self.link
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.link)
    }
}

/// A playback waiting for the viewer to acknowledge the spoiler warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPlayback {
    target: Option<NavigationTarget>,
}

impl PendingPlayback {
    /// The viewer is ready. `None` when the fixture had no usable link.
    pub fn confirm(self) -> Option<NavigationTarget> {
        self.target
    }

    /// The viewer backed out; nothing is opened.
    pub fn cancel(self) {}

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackRequest {
    /// Finished fixture: ask before revealing anything.
    PendingConfirmation(PendingPlayback),
    /// Unplayed fixture with a usable link: open it straight away.
    Navigate(NavigationTarget),
    /// Unplayed fixture without a usable link: nothing happens.
    Unavailable,
}

/// Decides how a tap on a fixture proceeds.
///
/// Finished fixtures always go through the spoiler confirmation, even when
/// their link is missing, so the presence of a replay never hints at anything.
///
/// # Example
/// ```
/// use redlens::data_fetcher::models::{Fixture, MatchStatus};
/// use redlens::playback::{PlaybackRequest, request_playback};
///
/// let fixture = Fixture {
///     date: "2025-08-17".to_string(),
///     time: "16:30".to_string(),
///     opponent: "Manchester United".to_string(),
///     competition: "Premier League".to_string(),
///     status: MatchStatus::Completed,
///     score: "0-1".to_string(),
///     is_home: false,
///     scheme_url: String::new(),
/// };
///
/// match request_playback(&fixture) {
///     PlaybackRequest::PendingConfirmation(pending) => assert!(pending.confirm().is_none()),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn request_playback(fixture: &Fixture) -> PlaybackRequest {
    let target = NavigationTarget::parse(&fixture.scheme_url);
    if fixture.is_finished() {
        PlaybackRequest::PendingConfirmation(PendingPlayback { target })
    } else {
        match target {
            Some(target) => PlaybackRequest::Navigate(target),
            None => PlaybackRequest::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::FixtureBuilder;

    const LINK: &str = "miguvideo://miguvideo?action=%7B%22type%22%3A%22JUMP_INNER_NEW_PAGE%22%7D";

    #[test]
    fn test_finished_requires_confirmation() {
        let fixture = FixtureBuilder::new("2025-08-17", "Manchester United")
            .finished("0-1")
            .scheme_url(LINK)
            .build();

        let PlaybackRequest::PendingConfirmation(pending) = request_playback(&fixture) else {
            panic!("expected a confirmation step");
        };
        assert!(pending.has_target());
        assert_eq!(pending.confirm().unwrap().as_str(), LINK);
    }

    #[test]
    fn test_finished_without_link_still_confirms() {
        let fixture = FixtureBuilder::new("2025-08-17", "Manchester United")
            .finished("0-1")
            .build();

        let PlaybackRequest::PendingConfirmation(pending) = request_playback(&fixture) else {
            panic!("expected a confirmation step");
        };
        assert!(!pending.has_target());
        assert!(pending.confirm().is_none());
    }

    #[test]
    fn test_cancel_opens_nothing() {
        let fixture = FixtureBuilder::new("2025-08-17", "Manchester United")
            .finished("0-1")
            .scheme_url(LINK)
            .build();
        if let PlaybackRequest::PendingConfirmation(pending) = request_playback(&fixture) {
            pending.cancel();
        } else {
            panic!("expected a confirmation step");
        }
    }

    #[test]
    fn test_unplayed_navigates_immediately() {
        let fixture = FixtureBuilder::new("2025-08-31", "Liverpool")
            .scheme_url("https://www.miguvideo.com/p/live/120000")
            .build();
        match request_playback(&fixture) {
            PlaybackRequest::Navigate(target) => {
                assert_eq!(target.url().scheme(), "https");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unplayed_without_link_is_unavailable() {
        let fixture = FixtureBuilder::new("2025-08-31", "Liverpool").build();
        assert_eq!(request_playback(&fixture), PlaybackRequest::Unavailable);

        let fixture = FixtureBuilder::new("2025-08-31", "Liverpool")
            .scheme_url("not a uri")
            .build();
        assert_eq!(request_playback(&fixture), PlaybackRequest::Unavailable);
    }

    #[test]
    fn test_links_pass_through_unchanged() {
        let links = [
            "https://www.miguvideo.com",
            "HTTPS://Example.COM/a/../b",
            r#"miguvideo://x?action={"a": 1}"#,
        ];
        for link in links {
            let finished = FixtureBuilder::new("2025-08-17", "Manchester United")
                .finished("0-1")
                .scheme_url(link)
                .build();
            let PlaybackRequest::PendingConfirmation(pending) = request_playback(&finished) else {
                panic!("expected a confirmation step");
            };
            let target = pending.confirm().unwrap();
            assert_eq!(target.as_str(), link);
            assert_eq!(target.to_string(), link);

            let unplayed = FixtureBuilder::new("2025-08-31", "Liverpool")
                .scheme_url(link)
                .build();
            match request_playback(&unplayed) {
                PlaybackRequest::Navigate(target) => assert_eq!(target.as_str(), link),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_status_behaves_as_unplayed() {
        let fixture = FixtureBuilder::new("2025-08-31", "Liverpool")
            .status("P")
            .scheme_url(LINK)
            .build();
        assert!(matches!(request_playback(&fixture), PlaybackRequest::Navigate(_)));
    }
}
