use crate::data_fetcher::models::{Fixture, MatchStatus};

/// Test utilities for creating fixture data
#[derive(Debug, Clone)]
pub struct FixtureBuilder {
    fixture: Fixture,
}

impl FixtureBuilder {
    /// Unplayed away league fixture kicking off at 15:00 London time.
    pub fn new(date: &str, opponent: &str) -> Self {
        Self {
            fixture: Fixture {
                date: date.to_string(),
                time: "15:00".to_string(),
                opponent: opponent.to_string(),
                competition: "Premier League".to_string(),
                status: MatchStatus::Unplayed,
                score: String::new(),
                is_home: false,
                scheme_url: String::new(),
            },
        }
    }

    pub fn time(mut self, time: &str) -> Self {
        self.fixture.time = time.to_string();
        self
    }

    pub fn home(mut self) -> Self {
        self.fixture.is_home = true;
        self
    }

    pub fn competition(mut self, competition: &str) -> Self {
        self.fixture.competition = competition.to_string();
        self
    }

    /// Marks the fixture completed with the given score.
    pub fn finished(mut self, score: &str) -> Self {
        self.fixture.status = MatchStatus::Completed;
        self.fixture.score = score.to_string();
        self
    }

    /// Sets a raw status code.
    pub fn status(mut self, code: &str) -> Self {
        self.fixture.status = MatchStatus::from(code.to_string());
        self
    }

    pub fn scheme_url(mut self, url: &str) -> Self {
        self.fixture.scheme_url = url.to_string();
        self
    }

    pub fn build(self) -> Fixture {
        self.fixture
    }
}

/// Start of the 2025/26 season: three results and four upcoming fixtures,
/// deliberately out of date order.
pub fn sample_season() -> Vec<Fixture> {
    vec![
        FixtureBuilder::new("2025-09-13", "Nottingham Forest")
            .home()
            .build(),
        FixtureBuilder::new("2025-08-17", "Manchester United")
            .time("16:30")
            .finished("0-1")
            .scheme_url("miguvideo://miguvideo?action=mu")
            .build(),
        FixtureBuilder::new("2025-08-31", "Liverpool")
            .time("16:30")
            .build(),
        FixtureBuilder::new("2025-08-23", "Leeds United")
            .time("17:30")
            .home()
            .finished("5-0")
            .scheme_url("miguvideo://miguvideo?action=leeds")
            .build(),
        FixtureBuilder::new("2025-09-16", "Athletic Club")
            .time("17:45")
            .competition("UEFA Champions League")
            .build(),
        FixtureBuilder::new("2025-08-10", "Athletic Club")
            .time("12:00")
            .home()
            .competition("Friendly")
            .finished("3-0")
            .build(),
        FixtureBuilder::new("2025-09-21", "Manchester City")
            .time("16:30")
            .home()
            .build(),
    ]
}

/// Serializes fixtures as a feed document.
pub fn feed_document(fixtures: &[Fixture]) -> String {
    serde_json::to_string_pretty(fixtures).unwrap_or_else(|_| "[]".to_string())
}
