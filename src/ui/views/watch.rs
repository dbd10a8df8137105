use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::{info_line, Level, Line};

pub fn render_watch_started(documents: &[String], color: bool) -> Vec<Line> {
    let mut lines: Vec<Line> = documents
        .iter()
        .map(|doc| info_line(&format!("watching \"{}\" and dependencies.", doc), color))
        .collect();
    lines.push(info_line("press Ctrl+C to stop", color));
    lines
}

pub fn render_document_changed(timestamp: &str, document: &str, color: bool, unicode: bool) -> Line {
    Line::new(
        Level::Info,
        format!(
            "{} {} {} changed",
            ColoredText::dim(format!("[{}]", timestamp)).render(color),
            Icon::Watch.colored(color, unicode),
            ColoredText::info(format!("\"{}\"", document)).render(color),
        ),
    )
}

pub fn render_shutdown(color: bool) -> Line {
    info_line("stop watching files", color)
}
