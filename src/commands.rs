use crate::cli::Args;
use crate::config::Config;
use crate::constants::{TERMINAL_TITLE, formats};
use crate::data_fetcher::api::{FeedLoader, FeedSync, RefreshOutcome};
use crate::data_fetcher::models::{Fixture, FixtureView};
use crate::data_fetcher::processors::HomeSlot;
use crate::data_fetcher::store::{FeedSnapshot, FixtureStore};
use crate::error::AppError;
use crate::playback::{NavigationTarget, PlaybackRequest, request_playback};
use crate::ui::{self, HomeSummary, StyledLine, colors, write_lines};
use chrono::NaiveDate;
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use std::sync::Arc;
use tracing::{info, warn};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.play.is_some() && (args.schedule || args.json) {
        return Err(AppError::config_error(
            "--play cannot be combined with --schedule or --json",
        ));
    }
    if args.slot.is_some() && (args.schedule || args.play.is_some()) {
        return Err(AppError::config_error(
            "--slot only applies to the home view",
        ));
    }
    if args.hide_scores && !args.schedule {
        return Err(AppError::config_error(
            "--hide-scores only applies to the schedule (-s)",
        ));
    }
    if let Some(date) = &args.play {
        NaiveDate::parse_from_str(date, formats::DATE).map_err(|e| {
            AppError::datetime_parse_error(format!("Invalid --play date '{date}': {e}"))
        })?;
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await
}

/// Handles configuration update commands (--set-feed-url, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_at(args, &Config::get_config_path()).await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Applies the update flags to the config file at `path`.
///
/// The file is edited as stored; `REDLENS_*` overrides in the environment are
/// never written back.
async fn update_config_at(args: &Args, path: &str) -> Result<Config, AppError> {
    let mut config = Config::load_stored_from_path(path)
        .await
        .unwrap_or_else(|e| {
            warn!("Existing config could not be loaded, starting from defaults: {e}");
            Config::default()
        });

    if let Some(new_feed_url) = &args.new_feed_url {
        config.feed_url = new_feed_url.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

/// Loads the bundled snapshot and, unless offline, refreshes from the remote feed.
///
/// Feed failures never fail the command; they are logged and show up in the
/// store's status.
pub async fn load_fixtures(config: &Config, offline: bool) -> Result<Arc<FixtureStore>, AppError> {
    let loader = FeedLoader::from_config(config)?;
    let store = Arc::new(FixtureStore::new());
    let sync = FeedSync::new(loader, Arc::clone(&store));

    if offline {
        if !sync.load_bundled().await {
            warn!("Offline mode and no bundled snapshot available");
        }
        return Ok(store);
    }

    match sync.initialize().await.await {
        Ok(RefreshOutcome::Updated(snapshot)) => {
            info!("Showing {} fixtures from the remote feed", snapshot.fixtures.len());
        }
        Ok(RefreshOutcome::Stale) => info!("Remote result superseded by a newer load"),
        Ok(RefreshOutcome::Failed(e)) => warn!("Showing previous data, refresh failed: {e}"),
        Err(e) => warn!("Refresh task did not complete: {e}"),
    }
    Ok(store)
}

/// Prints the home view.
pub async fn handle_home(args: &Args, store: &FixtureStore) -> Result<(), AppError> {
    let snapshot = store.snapshot().await;
    let status = store.status().await;

    if args.json {
        let summary = HomeSummary::new(&snapshot, status, store.projection());
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    let slot = args.slot.map(HomeSlot::from);
    let lines = ui::render_home(&snapshot, &status, store.projection(), slot);
    write_lines(&mut stdout(), &lines)
}

/// Prints the full schedule.
pub async fn handle_schedule(args: &Args, store: &FixtureStore) -> Result<(), AppError> {
    let snapshot = store.snapshot().await;

    if args.json {
        let views: Vec<FixtureView> = snapshot
            .schedule()
            .into_iter()
            .map(|f| FixtureView::new(f, store.projection()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    let mut lines = ui::render_schedule(&snapshot, store.projection(), !args.hide_scores);
    lines.push(StyledLine::new());
    lines.push(ui::home::status_line(&store.status().await, store.projection()));
    write_lines(&mut stdout(), &lines)
}

/// Picks the fixture to play. Without an opponent the date must be unambiguous.
pub fn select_fixture<'a>(
    snapshot: &'a FeedSnapshot,
    date: &str,
    opponent: Option<&str>,
) -> Result<&'a Fixture, AppError> {
    if let Some(opponent) = opponent {
        return snapshot
            .find(date, opponent)
            .ok_or_else(|| AppError::fixture_not_found(date, opponent));
    }

    let candidates = snapshot.on_date(date);
    match candidates.as_slice() {
        [] => Err(AppError::fixture_not_found(date, "")),
        [fixture] => Ok(*fixture),
        several => {
            let opponents: Vec<&str> = several.iter().map(|f| f.opponent.as_str()).collect();
            Err(AppError::config_error(format!(
                "{} fixtures on {date} ({}), pick one with --opponent",
                several.len(),
                opponents.join(", ")
            )))
        }
    }
}

/// Runs the playback flow for `--play` and prints where it leads.
pub async fn handle_play(args: &Args, store: &FixtureStore) -> Result<(), AppError> {
    let Some(date) = args.play.as_deref() else {
        return Ok(());
    };
    let snapshot = store.snapshot().await;
    let fixture = select_fixture(&snapshot, date, args.opponent.as_deref())?;
    info!("Playback requested for {} {}", fixture.date, fixture.opponent);

    let target = match request_playback(fixture) {
        PlaybackRequest::PendingConfirmation(pending) => {
            if args.assume_yes || ui::confirm_spoiler().await? {
                let target = pending.confirm();
                if target.is_none() {
                    println!("暂无录像");
                }
                target
            } else {
                pending.cancel();
                println!("已取消");
                None
            }
        }
        PlaybackRequest::Navigate(target) => Some(target),
        PlaybackRequest::Unavailable => {
            info!("No live link for {} {}", fixture.date, fixture.opponent);
            None
        }
    };

    if let Some(target) = target {
        print_target(&target)?;
    }
    Ok(())
}

fn print_target(target: &NavigationTarget) -> Result<(), AppError> {
    write_lines(
        &mut stdout(),
        &[StyledLine::colored(target.as_str(), colors::accent_fg())],
    )
}
