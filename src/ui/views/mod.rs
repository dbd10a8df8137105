//! Pure renderers: every function here returns text and never prints.

pub mod build;
pub mod clean;
pub mod deps;
pub mod version;
pub mod watch;

use crate::ui::primitives::text::ColoredText;

/// How a rendered line is routed and filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Progress; hidden by `--silent`
    Info,
    /// Echoed command; shown with `--verbose` or `--dry-run`
    Command,
    /// Tool output; always shown
    Output,
    /// Problems; always shown, on stderr
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub level: Level,
    pub text: String,
}

impl Line {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// `texmgr: <msg>`
pub fn info_line(msg: &str, color: bool) -> Line {
    Line::new(
        Level::Info,
        ColoredText::accent(format!("{}: {}", texmgr::NAME, msg)).render(color),
    )
}

/// `texmgr: <command>`
pub fn command_line(command: &str, color: bool) -> Line {
    Line::new(
        Level::Command,
        format!(
            "{} {}",
            ColoredText::accent(format!("{}:", texmgr::NAME)).render(color),
            command
        ),
    )
}

/// `texmgr: ERROR: <msg>`
pub fn error_line(msg: &str, color: bool) -> Line {
    Line::new(
        Level::Error,
        format!(
            "{} {} {}",
            ColoredText::accent(format!("{}:", texmgr::NAME)).render(color),
            ColoredText::error("ERROR:").render(color),
            msg
        ),
    )
}

/// Captured process output, trimmed; nothing for blank text
pub fn output_line(level: Level, text: &str) -> Option<Line> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| Line::new(level, trimmed))
}
