use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::feed;
use crate::data_fetcher::processors::time_projection::{LocalKickoff, TimeProjection};
use crate::data_fetcher::teams::{
    TRACKED_TEAM_DISPLAY_NAME, competition_display_name, translate_team,
};

/// Result state of a fixture as published in the feed.
///
/// Only `C` marks a completed fixture. Unrecognised codes are kept verbatim
/// and treated as unplayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    Unplayed,
    Completed,
    Other(String),
}

impl From<String> for MatchStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            feed::STATUS_COMPLETED => MatchStatus::Completed,
            feed::STATUS_UNPLAYED => MatchStatus::Unplayed,
            _ => MatchStatus::Other(code),
        }
    }
}

impl From<MatchStatus> for String {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Completed => feed::STATUS_COMPLETED.to_string(),
            MatchStatus::Unplayed => feed::STATUS_UNPLAYED.to_string(),
            MatchStatus::Other(code) => code,
        }
    }
}

impl MatchStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, MatchStatus::Completed)
    }
}

/// One match of the tracked team, exactly as decoded from the feed.
///
/// Identity is the pair (date, opponent); the feed carries no id field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Match date in the feed's timezone, `YYYY-MM-DD`.
    pub date: String,
    /// Kick-off in the feed's timezone, `HH:MM`.
    pub time: String,
    pub opponent: String,
    #[serde(default = "default_competition", deserialize_with = "competition_or_default")]
    pub competition: String,
    pub status: MatchStatus,
    #[serde(default, deserialize_with = "string_or_default")]
    pub score: String,
    pub is_home: bool,
    /// Deep link handed to the platform for replay or live video. Empty when unknown.
    #[serde(default, deserialize_with = "string_or_default")]
    pub scheme_url: String,
}

fn default_competition() -> String {
    feed::DEFAULT_COMPETITION.to_string()
}

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn competition_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_competition))
}

/// Borrowed (date, opponent) identity of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixtureId<'a> {
    pub date: &'a str,
    pub opponent: &'a str,
}

impl Fixture {
    pub fn id(&self) -> FixtureId<'_> {
        FixtureId {
            date: &self.date,
            opponent: &self.opponent,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_completed()
    }

    /// Every fixture is presented with a replay or live action; an empty
    /// link simply leads nowhere once followed.
    pub fn has_playback(&self) -> bool {
        true
    }

    pub fn opponent_display_name(&self) -> String {
        translate_team(&self.opponent)
    }

    pub fn home_team_name(&self) -> String {
        if self.is_home {
            TRACKED_TEAM_DISPLAY_NAME.to_string()
        } else {
            self.opponent_display_name()
        }
    }

    pub fn away_team_name(&self) -> String {
        if self.is_home {
            self.opponent_display_name()
        } else {
            TRACKED_TEAM_DISPLAY_NAME.to_string()
        }
    }

    pub fn competition_display_name(&self) -> String {
        competition_display_name(&self.competition)
    }

    pub fn venue_label(&self) -> &'static str {
        if self.is_home { "主场" } else { "客场" }
    }

    pub fn kickoff(&self, projection: &TimeProjection) -> LocalKickoff {
        projection.project(&self.date, &self.time)
    }

    /// Kick-off date in Beijing time, or the raw feed date if unparseable.
    pub fn local_date(&self) -> String {
        self.kickoff(&TimeProjection::default()).date
    }

    /// Kick-off time in Beijing time, or the raw feed time if unparseable.
    pub fn local_time(&self) -> String {
        self.kickoff(&TimeProjection::default()).time
    }
}

/// Fixture together with every derived display field, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureView {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub is_finished: bool,
    pub has_playback: bool,
    pub home_team_name: String,
    pub away_team_name: String,
    pub competition_name: String,
    pub venue: &'static str,
    pub local_date: String,
    pub local_time: String,
}

impl FixtureView {
    pub fn new(fixture: &Fixture, projection: &TimeProjection) -> Self {
        let kickoff = fixture.kickoff(projection);
        Self {
            fixture: fixture.clone(),
            is_finished: fixture.is_finished(),
            has_playback: fixture.has_playback(),
            home_team_name: fixture.home_team_name(),
            away_team_name: fixture.away_team_name(),
            competition_name: fixture.competition_display_name(),
            venue: fixture.venue_label(),
            local_date: kickoff.date,
            local_time: kickoff.time,
        }
    }
}
