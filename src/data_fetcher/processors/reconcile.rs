//! Derives the home-view state from the full fixture list.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;

use crate::constants::feed::{RECENT_RESULT_WINDOW_HOURS, UPCOMING_PREVIEW_LEN};
use crate::data_fetcher::models::Fixture;
use crate::data_fetcher::processors::time_projection::TimeProjection;

/// The two hero slots of the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HomeSlot {
    /// Most recent result, slot 0.
    LastFinished,
    /// Next fixture to be played, slot 1.
    Next,
}

impl HomeSlot {
    pub fn index(self) -> usize {
        match self {
            HomeSlot::LastFinished => 0,
            HomeSlot::Next => 1,
        }
    }
}

/// Home-view state derived from one fixture list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub last_finished: Option<Fixture>,
    pub next_upcoming: Option<Fixture>,
    pub upcoming_preview: Vec<Fixture>,
    pub default_selected: HomeSlot,
    pub finished_count: usize,
    pub upcoming_count: usize,
}

impl Default for Reconciliation {
    fn default() -> Self {
        Self {
            last_finished: None,
            next_upcoming: None,
            upcoming_preview: Vec::new(),
            default_selected: HomeSlot::Next,
            finished_count: 0,
            upcoming_count: 0,
        }
    }
}

impl Reconciliation {
    pub fn default_selected_index(&self) -> usize {
        self.default_selected.index()
    }
}

/// Splits fixtures into results and upcoming matches and picks the home-view state.
///
/// Both groups are stably sorted by date, so fixtures sharing a date keep feed
/// order: the last such result wins `last_finished`, the first such upcoming
/// fixture wins `next_upcoming`.
pub fn reconcile(fixtures: &[Fixture], now: DateTime<Utc>) -> Reconciliation {
    reconcile_with_projection(fixtures, now, &TimeProjection::default())
}

pub fn reconcile_with_projection(
    fixtures: &[Fixture],
    now: DateTime<Utc>,
    projection: &TimeProjection,
) -> Reconciliation {
    let (mut finished, mut upcoming): (Vec<&Fixture>, Vec<&Fixture>) =
        fixtures.iter().partition(|f| f.is_finished());
    finished.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));

    let last_finished = finished.last().map(|f| (*f).clone());
    let next_upcoming = upcoming.first().map(|f| (*f).clone());
    let upcoming_preview = upcoming
        .iter()
        .take(UPCOMING_PREVIEW_LEN)
        .map(|f| (*f).clone())
        .collect();

    let default_selected = default_slot(last_finished.as_ref(), now, projection);

    debug!(
        "Reconciled {} fixtures: {} finished, {} upcoming, default slot {:?}",
        fixtures.len(),
        finished.len(),
        upcoming.len(),
        default_selected
    );

    Reconciliation {
        last_finished,
        next_upcoming,
        upcoming_preview,
        default_selected,
        finished_count: finished.len(),
        upcoming_count: upcoming.len(),
    }
}

/// Slot 0 while the latest result is less than 48 hours old, measured from
/// midnight of its date in the display timezone; slot 1 otherwise.
fn default_slot(
    last_finished: Option<&Fixture>,
    now: DateTime<Utc>,
    projection: &TimeProjection,
) -> HomeSlot {
    let Some(fixture) = last_finished else {
        return HomeSlot::Next;
    };
    match projection.target_midnight(&fixture.date) {
        Some(midnight) if now - midnight < Duration::hours(RECENT_RESULT_WINDOW_HOURS) => {
            HomeSlot::LastFinished
        }
        _ => HomeSlot::Next,
    }
}
