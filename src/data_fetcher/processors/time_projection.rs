//! Kick-off time projection from the feed's London wall clock into Beijing time.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::constants::formats;

/// Civil timezone the feed publishes kick-off times in.
pub const SOURCE_TZ: Tz = chrono_tz::Europe::London;

/// Civil timezone kick-off times are displayed in.
pub const TARGET_TZ: Tz = chrono_tz::Asia::Shanghai;

/// Kick-off date and time as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalKickoff {
    pub date: String,
    pub time: String,
    /// False when the feed strings could not be parsed and are shown raw.
    pub projected: bool,
}

/// Projects feed wall-clock times between two IANA timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeProjection {
    source: Tz,
    target: Tz,
}

impl Default for TimeProjection {
    fn default() -> Self {
        Self::new(SOURCE_TZ, TARGET_TZ)
    }
}

impl TimeProjection {
    pub fn new(source: Tz, target: Tz) -> Self {
        Self { source, target }
    }

    pub fn target(&self) -> Tz {
        self.target
    }

    /// Resolves a feed date and time to an instant.
    ///
    /// Date and time are parsed together. Ambiguous wall-clock times during the
    /// autumn change resolve to the earlier instant; times inside the spring gap
    /// are moved forward by an hour.
    pub fn kickoff_instant(&self, date: &str, time: &str) -> Option<DateTime<Utc>> {
        let combined = format!("{date} {time}");
        let naive = NaiveDateTime::parse_from_str(&combined, formats::DATE_TIME).ok()?;
        resolve_local(self.source, naive).map(|dt| dt.with_timezone(&Utc))
    }

    /// Projects a feed date and time into the target timezone.
    ///
    /// If the pair cannot be parsed both raw strings are returned unchanged.
    pub fn project(&self, date: &str, time: &str) -> LocalKickoff {
        match self.kickoff_instant(date, time) {
            Some(instant) => {
                let local = instant.with_timezone(&self.target);
                LocalKickoff {
                    date: local.format(formats::DATE).to_string(),
                    time: local.format(formats::TIME).to_string(),
                    projected: true,
                }
            }
            None => {
                debug!("Unparseable kick-off '{date} {time}', showing raw values");
                LocalKickoff {
                    date: date.to_string(),
                    time: time.to_string(),
                    projected: false,
                }
            }
        }
    }

    /// Start of the given calendar date in the target timezone.
    pub fn target_midnight(&self, date: &str) -> Option<DateTime<Utc>> {
        let day = NaiveDate::parse_from_str(date, formats::DATE).ok()?;
        resolve_local(self.target, day.and_hms_opt(0, 0, 0)?).map(|dt| dt.with_timezone(&Utc))
    }
}

fn resolve_local(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) => Some(dt),
        chrono::LocalResult::Ambiguous(earliest, _) => Some(earliest),
        chrono::LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest(),
    }
}

/// Projects a feed kick-off from London time into Beijing time.
///
/// # Examples
/// ```
/// use redlens::data_fetcher::processors::to_target_local;
///
/// let kickoff = to_target_local("2025-08-17", "16:30");
/// assert_eq!(kickoff.date, "2025-08-17");
/// assert_eq!(kickoff.time, "23:30");
/// ```
pub fn to_target_local(date: &str, time: &str) -> LocalKickoff {
    TimeProjection::default().project(date, time)
}
