//! Small string helpers shared by the home view and the schedule list.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use unicode_width::UnicodeWidthStr;

/// `2025-08-24` -> `08-24`. Anything without three parts is returned as is.
pub fn format_date_short(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() >= 3 {
        format!("{}-{}", parts[1], parts[2])
    } else {
        date.to_string()
    }
}

/// `2025-08-24` -> `08月`, empty when there is no month part.
pub fn format_month(date: &str) -> String {
    date.split('-')
        .nth(1)
        .map(|month| format!("{month}月"))
        .unwrap_or_default()
}

/// `2025-08-24` -> `24`, empty when there is no day part.
pub fn format_day(date: &str) -> String {
    date.split('-').nth(2).unwrap_or_default().to_string()
}

/// Load time as wall-clock time in the display timezone.
pub fn format_loaded_at(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%m-%d %H:%M").to_string()
}

/// Pads to a display width, counting CJK characters as two columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(current)))
}

pub fn pad_left(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    format!("{}{text}", " ".repeat(width.saturating_sub(current)))
}
