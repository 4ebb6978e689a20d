use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

use crate::data_fetcher::processors::HomeSlot;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Hero card to show on the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SlotArg {
    /// The most recent result (上一场).
    Last,
    /// The next fixture (下一场).
    Next,
}

impl From<SlotArg> for HomeSlot {
    fn from(slot: SlotArg) -> Self {
        match slot {
            SlotArg::Last => HomeSlot::LastFinished,
            SlotArg::Next => HomeSlot::Next,
        }
    }
}

/// True when the command only touches configuration and never loads fixtures.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_feed_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// RedLens: Arsenal fixtures and spoiler-free replays in your terminal
///
/// Shows the latest result or the next fixture with kick-off times in Beijing
/// time, the upcoming fixtures and the full season schedule. Replays of
/// finished matches are only opened after a spoiler warning.
///
/// Data comes from the bundled snapshot first and is then refreshed from the
/// remote feed. If the refresh fails the bundled data is shown and flagged.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show the full season schedule instead of the home view.
    #[arg(short = 's', long = "schedule", help_heading = "Display Options")]
    pub schedule: bool,

    /// Hide scores of finished matches in the schedule.
    #[arg(long = "hide-scores", help_heading = "Display Options")]
    pub hide_scores: bool,

    /// Show this hero card instead of the one picked from the latest result's age.
    #[arg(long = "slot", value_enum, help_heading = "Display Options")]
    pub slot: Option<SlotArg>,

    /// Print the view as JSON with all derived display fields.
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Do not contact the remote feed; use the bundled snapshot only.
    #[arg(long = "offline", help_heading = "Display Options")]
    pub offline: bool,

    /// Open the replay or live stream of the fixture on this date (YYYY-MM-DD, London time).
    #[arg(long = "play", value_name = "DATE", help_heading = "Playback")]
    pub play: Option<String>,

    /// Opponent of the fixture to play, as written in the feed. Needed when a
    /// date has more than one fixture.
    #[arg(long = "opponent", requires = "play", help_heading = "Playback")]
    pub opponent: Option<String>,

    /// Skip the spoiler warning and confirm straight away.
    #[arg(long = "yes", short = 'y', requires = "play", help_heading = "Playback")]
    pub assume_yes: bool,

    /// Update the remote feed URL in config.
    #[arg(long = "set-feed-url", value_name = "URL", help_heading = "Configuration")]
    pub new_feed_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let args = Args::parse_from(["redlens", "--play", "2025-08-23", "--opponent", "Leeds United"]);
        assert_eq!(args.play.as_deref(), Some("2025-08-23"));
        assert_eq!(args.opponent.as_deref(), Some("Leeds United"));
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_opponent_requires_play() {
        assert!(Args::try_parse_from(["redlens", "--opponent", "Leeds United"]).is_err());
    }

    #[test]
    fn test_parse_slot() {
        let args = Args::parse_from(["redlens", "--slot", "last"]);
        assert_eq!(args.slot, Some(SlotArg::Last));
        assert_eq!(args.slot.map(HomeSlot::from), Some(HomeSlot::LastFinished));
        assert_eq!(HomeSlot::from(SlotArg::Next), HomeSlot::Next);
        assert!(Args::try_parse_from(["redlens", "--slot", "previous"]).is_err());
        assert_eq!(Args::parse_from(["redlens"]).slot, None);
    }

    #[test]
    fn test_config_operations() {
        let args = Args::parse_from(["redlens", "-l"]);
        assert!(is_config_operation(&args));
        let args = Args::parse_from(["redlens", "--set-feed-url", "https://example.com/f.json"]);
        assert!(is_config_operation(&args));
        assert!(!is_config_operation(&Args::parse_from(["redlens", "-s", "--json"])));
    }
}
