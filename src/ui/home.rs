//! Home view: the hero card of the default slot and the upcoming preview.

use serde::Serialize;

use super::colors::{accent_fg, muted_fg, text_fg, warning_fg};
use super::formatting::{
    format_date_short, format_day, format_loaded_at, format_month, pad_left, pad_right,
};
use super::StyledLine;
use crate::constants::TERMINAL_TITLE;
use crate::data_fetcher::models::{Fixture, FixtureView};
use crate::data_fetcher::processors::{HomeSlot, TimeProjection};
use crate::data_fetcher::store::{FeedSnapshot, FeedSource, FeedStatus};

const SEASON_NOT_STARTED: &str = "新赛季即将开始";
const SEASON_OVER: &str = "本赛季已结束";
const NAME_WIDTH: usize = 14;

/// Home view content for `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct HomeSummary {
    pub default_selected: HomeSlot,
    pub default_selected_index: usize,
    pub last_finished: Option<FixtureView>,
    pub next_upcoming: Option<FixtureView>,
    pub upcoming_preview: Vec<FixtureView>,
    pub status: FeedStatus,
    pub stale: bool,
}

impl HomeSummary {
    pub fn new(snapshot: &FeedSnapshot, status: FeedStatus, projection: &TimeProjection) -> Self {
        let rec = &snapshot.reconciliation;
        let view = |f: &Fixture| FixtureView::new(f, projection);
        Self {
            default_selected: rec.default_selected,
            default_selected_index: rec.default_selected_index(),
            last_finished: rec.last_finished.as_ref().map(view),
            next_upcoming: rec.next_upcoming.as_ref().map(view),
            upcoming_preview: rec.upcoming_preview.iter().map(view).collect(),
            stale: status.is_stale(),
            status,
        }
    }
}

/// Builds the home view. Without an explicit slot the reconciled default is shown.
pub fn render_home(
    snapshot: &FeedSnapshot,
    status: &FeedStatus,
    projection: &TimeProjection,
    slot: Option<HomeSlot>,
) -> Vec<StyledLine> {
    let rec = &snapshot.reconciliation;
    let mut lines = vec![StyledLine::colored(TERMINAL_TITLE, accent_fg()), StyledLine::new()];

    let selected = slot.unwrap_or(rec.default_selected);
    let slot_fixture = match selected {
        HomeSlot::LastFinished => rec.last_finished.as_ref(),
        HomeSlot::Next => rec.next_upcoming.as_ref(),
    };
    match slot_fixture {
        Some(fixture) => lines.extend(hero_card(fixture, projection)),
        None => lines.push(StyledLine::colored(empty_slot_text(selected), muted_fg())),
    }
    lines.push(pager(selected));
    lines.push(StyledLine::new());

    lines.push(
        StyledLine::colored("后续赛程", text_fg())
            .push("    查看全部: redlens --schedule", Some(accent_fg())),
    );
    if rec.upcoming_preview.is_empty() {
        lines.push(StyledLine::colored(SEASON_OVER, muted_fg()));
    }
    for fixture in &rec.upcoming_preview {
        lines.push(preview_row(fixture, projection));
    }

    lines.push(StyledLine::new());
    lines.push(status_line(status, projection));
    lines
}

fn empty_slot_text(slot: HomeSlot) -> &'static str {
    match slot {
        HomeSlot::LastFinished => SEASON_NOT_STARTED,
        HomeSlot::Next => SEASON_OVER,
    }
}

fn pager(selected: HomeSlot) -> StyledLine {
    let (first, second, other) = match selected {
        HomeSlot::LastFinished => ("● 上一场", "○ 下一场", "next"),
        HomeSlot::Next => ("○ 上一场", "● 下一场", "last"),
    };
    StyledLine::colored(format!("{first}  {second}"), muted_fg())
        .push(format!("    切换: redlens --slot {other}"), Some(accent_fg()))
}

fn hero_card(fixture: &Fixture, projection: &TimeProjection) -> Vec<StyledLine> {
    let kickoff = fixture.kickoff(projection);
    let finished = fixture.is_finished();
    let (badge, badge_color) = if finished {
        ("全场回放", accent_fg())
    } else {
        ("即将开始", muted_fg())
    };

    let mut lines = vec![
        StyledLine::colored(format!("[{badge}]"), badge_color).push(
            format!("  {} {}", format_date_short(&kickoff.date), kickoff.time),
            Some(text_fg()),
        ),
        StyledLine::colored(pad_left(&fixture.home_team_name(), NAME_WIDTH), text_fg())
            .push("  VS  ", Some(muted_fg()))
            .push(fixture.away_team_name(), Some(text_fg())),
        StyledLine::colored(
            format!("{}{}", " ".repeat(NAME_WIDTH), pad_right(fixture.venue_label(), 8)),
            muted_fg(),
        )
        .push(fixture.competition_display_name(), Some(muted_fg())),
    ];

    let action = if finished {
        StyledLine::colored("FULL MATCH REPLAY", accent_fg()).push("  点击播放 · 无剧透", Some(text_fg()))
    } else {
        StyledLine::colored("LIVE BROADCAST", accent_fg()).push("  进入直播间", Some(text_fg()))
    };
    lines.push(action);
    lines.push(
        StyledLine::colored(
            format!("redlens --play {} --opponent \"{}\"", fixture.date, fixture.opponent),
            muted_fg(),
        ),
    );
    lines
}

/// One upcoming preview row: month/day, opponent, competition, local time, venue.
fn preview_row(fixture: &Fixture, projection: &TimeProjection) -> StyledLine {
    let kickoff = fixture.kickoff(projection);
    StyledLine::colored(
        format!(
            "{} {}  ",
            pad_left(&format_month(&kickoff.date), 4),
            pad_left(&format_day(&kickoff.date), 2)
        ),
        muted_fg(),
    )
    .push(pad_right(&fixture.opponent_display_name(), NAME_WIDTH), Some(text_fg()))
    .push(pad_right(&fixture.competition_display_name(), 8), Some(muted_fg()))
    .push(pad_right(&kickoff.time, 7), Some(accent_fg()))
    .push(fixture.venue_label(), Some(muted_fg()))
}

/// Where the shown data came from and whether it may be out of date.
pub fn status_line(status: &FeedStatus, projection: &TimeProjection) -> StyledLine {
    let source = match status.source {
        Some(FeedSource::Remote) => "在线数据",
        Some(FeedSource::Bundled) => "内置数据",
        None => "无数据",
    };
    let loaded = status
        .loaded_at
        .map(|at| format!(" · 更新于 {}", format_loaded_at(at, projection.target())))
        .unwrap_or_default();

    if !status.is_stale() {
        return StyledLine::colored(format!("{source}{loaded}"), muted_fg());
    }
    let reason = status
        .last_failure
        .as_ref()
        .map(|failure| format!(" ({})", failure.message))
        .unwrap_or_default();
    StyledLine::colored(format!("{source}{loaded} · 可能不是最新{reason}"), warning_fg())
}
