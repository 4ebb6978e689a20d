//! Spoiler confirmation prompt on stdin.

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};

use super::colors::{accent_fg, muted_fg, warning_fg};
use super::{StyledLine, write_lines};
use crate::error::AppError;
use crate::playback::{SPOILER_CANCEL_LABEL, SPOILER_CONFIRM_LABEL, SPOILER_MESSAGE, SPOILER_TITLE};

/// Lines of the spoiler warning.
pub fn spoiler_lines() -> Vec<StyledLine> {
    let mut lines = vec![StyledLine::colored(SPOILER_TITLE, warning_fg()), StyledLine::new()];
    lines.extend(SPOILER_MESSAGE.lines().map(StyledLine::plain));
    lines.push(StyledLine::new());
    lines.push(
        StyledLine::colored(format!("[y] {SPOILER_CONFIRM_LABEL}"), accent_fg())
            .push(format!("   [n] {SPOILER_CANCEL_LABEL}"), Some(muted_fg())),
    );
    lines
}

/// Reads one answer. Only `y`/`yes` (any case) confirms; end of input cancels.
pub async fn read_confirmation<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<bool, AppError> {
    let mut input = String::new();
    let read = reader.read_line(&mut input).await?;
    if read == 0 {
        return Ok(false);
    }
    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Shows the spoiler warning and waits for the viewer's answer.
///
/// # Example
/// ```no_run
/// use redlens::ui::confirm_spoiler;
///
/// # async fn example() -> Result<(), redlens::AppError> {
/// if confirm_spoiler().await? {
///     println!("opening replay");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn confirm_spoiler() -> Result<bool, AppError> {
    write_lines(&mut std::io::stdout(), &spoiler_lines())?;
    let mut reader = io::BufReader::new(io::stdin());
    read_confirmation(&mut reader).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_confirmation() {
        assert!(read_confirmation(&mut &b"y\n"[..]).await.unwrap());
        assert!(read_confirmation(&mut &b"  YES \n"[..]).await.unwrap());
        assert!(!read_confirmation(&mut &b"n\n"[..]).await.unwrap());
        assert!(!read_confirmation(&mut &b"\n"[..]).await.unwrap());
        assert!(!read_confirmation(&mut &b""[..]).await.unwrap());
    }

    #[test]
    fn test_spoiler_lines() {
        let text: Vec<String> = spoiler_lines().iter().map(StyledLine::text).collect();
        assert_eq!(text[0], "防剧透预警");
        assert!(text.iter().any(|l| l.contains("用手遮挡屏幕顶部")));
        assert!(text.last().unwrap().contains("[y] 我已准备好，跳转观看"));
    }
}
