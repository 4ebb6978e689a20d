//! Terminal presentation: home view, schedule list and the spoiler prompt.
//!
//! Views are built as lists of [`StyledLine`]s so their text can be checked
//! without a terminal, then written out with crossterm colors.

pub mod colors;
pub mod formatting;
pub mod home;
pub mod prompts;
pub mod schedule;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

use crate::error::AppError;

pub use home::{HomeSummary, render_home};
pub use prompts::{confirm_spoiler, read_confirmation};
pub use schedule::render_schedule;

/// One output line made of optionally colored segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    segments: Vec<(String, Option<Color>)>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().push(text, None)
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self::new().push(text, Some(color))
    }

    pub fn push(mut self, text: impl Into<String>, color: Option<Color>) -> Self {
        self.segments.push((text.into(), color));
        self
    }

    /// Text without styling.
    pub fn text(&self) -> String {
        self.segments.iter().map(|(text, _)| text.as_str()).collect()
    }
}

/// Writes lines to `out` and flushes once at the end.
pub fn write_lines<W: Write>(out: &mut W, lines: &[StyledLine]) -> Result<(), AppError> {
    for line in lines {
        for (text, color) in &line.segments {
            match color {
                Some(color) => queue!(out, SetForegroundColor(*color), Print(text), ResetColor)?,
                None => queue!(out, Print(text))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text_drops_colors() {
        let line = StyledLine::colored("全场回放", colors::accent_fg()).push(" 08-24", None);
        assert_eq!(line.text(), "全场回放 08-24");
    }

    #[test]
    fn test_write_lines_emits_text() {
        let mut buffer = Vec::new();
        write_lines(
            &mut buffer,
            &[StyledLine::plain("RedLens"), StyledLine::colored("VS", colors::muted_fg())],
        )
        .unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert!(written.starts_with("RedLens\n"));
        assert!(written.contains("VS"));
    }
}
