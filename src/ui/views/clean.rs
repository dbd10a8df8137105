use texmgr::application::CleanResult;
use texmgr::Document;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::{error_line, info_line, Level, Line};

pub fn render_clean_start(document: &Document, color: bool) -> Line {
    info_line(
        &format!("Cleaning build files for \"{}\"", document),
        color,
    )
}

/// Removed paths are command-level lines; failures are errors.
pub fn render_clean_result(
    result: &CleanResult,
    dry_run: bool,
    color: bool,
    unicode: bool,
) -> Vec<Line> {
    let suffix = if dry_run { " (dry run)" } else { "" };
    let mut lines: Vec<Line> = result
        .removed
        .iter()
        .map(|path| {
            Line::new(
                Level::Command,
                format!(
                    "  {} {}{}",
                    Icon::Trash.colored(color, unicode),
                    path.display(),
                    ColoredText::dim(suffix).render(color)
                ),
            )
        })
        .collect();

    lines.extend(result.errors.iter().map(|failure| {
        error_line(
            &format!(
                "when cleaning \"{}\": could not remove '{}' : {}",
                result.document,
                failure.path.display(),
                failure.message
            ),
            color,
        )
    }));
    lines
}
