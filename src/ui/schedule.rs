//! Full-season schedule list.

use super::colors::{accent_fg, muted_fg, score_fg, text_fg};
use super::formatting::{format_date_short, pad_left, pad_right};
use super::StyledLine;
use crate::data_fetcher::models::Fixture;
use crate::data_fetcher::processors::TimeProjection;
use crate::data_fetcher::store::FeedSnapshot;

const NAME_WIDTH: usize = 14;
const MIDDLE_WIDTH: usize = 7;

/// Builds the schedule list. Scores of finished fixtures are replaced by `VS`
/// when `show_scores` is off; the latest result is marked with `▶`.
pub fn render_schedule(
    snapshot: &FeedSnapshot,
    projection: &TimeProjection,
    show_scores: bool,
) -> Vec<StyledLine> {
    let mut lines = vec![
        StyledLine::colored("全部赛程", text_fg()).push(
            if show_scores {
                "    比分已显示"
            } else {
                "    比分已隐藏"
            },
            Some(muted_fg()),
        ),
        StyledLine::new(),
    ];

    let latest = snapshot.reconciliation.last_finished.as_ref().map(Fixture::id);
    for fixture in snapshot.schedule() {
        let marker = latest == Some(fixture.id());
        lines.push(schedule_row(fixture, projection, show_scores, marker));
    }
    if snapshot.is_empty() {
        lines.push(StyledLine::colored("暂无赛程", muted_fg()));
    }
    lines
}

fn schedule_row(
    fixture: &Fixture,
    projection: &TimeProjection,
    show_scores: bool,
    marker: bool,
) -> StyledLine {
    let kickoff = fixture.kickoff(projection);
    let (middle, middle_color) = if fixture.is_finished() {
        let text = match (show_scores, fixture.score.is_empty()) {
            (false, _) => "VS",
            (true, true) => "-",
            (true, false) => fixture.score.as_str(),
        };
        (text.to_string(), if show_scores { score_fg() } else { muted_fg() })
    } else {
        (kickoff.time.clone(), accent_fg())
    };

    StyledLine::colored(if marker { "▶ " } else { "  " }, accent_fg())
        .push(
            format!("{}  ", format_date_short(&kickoff.date)),
            Some(text_fg()),
        )
        .push(
            pad_right(&fixture.competition_display_name(), 8),
            Some(muted_fg()),
        )
        .push(pad_left(&fixture.home_team_name(), NAME_WIDTH), Some(text_fg()))
        .push(
            format!(" {} ", center(&middle, MIDDLE_WIDTH)),
            Some(middle_color),
        )
        .push(fixture.away_team_name(), Some(text_fg()))
}

fn center(text: &str, width: usize) -> String {
    let len = unicode_width::UnicodeWidthStr::width(text);
    let left = width.saturating_sub(len) / 2;
    pad_right(&format!("{}{text}", " ".repeat(left)), width)
}
