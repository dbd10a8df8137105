//! Text rendering of [`BuildEvent`]s

use texmgr::application::BuildEvent;

use crate::ui::views::watch::{render_document_changed, render_shutdown, render_watch_started};
use crate::ui::views::{command_line, error_line, info_line, output_line, Level, Line};

/// Render one event. `timestamp` is only used by change notifications.
pub fn render_event(event: &BuildEvent, timestamp: &str, color: bool, unicode: bool) -> Vec<Line> {
    match event {
        BuildEvent::StepStarted {
            index,
            total,
            description,
            ..
        } => vec![info_line(
            &format!("step {}/{} - {}", index, total, description),
            color,
        )],
        BuildEvent::CommandIssued { command } => vec![command_line(command, color)],
        BuildEvent::CommandTimedOut {
            command,
            timeout_secs,
        } => vec![error_line(
            &format!("command timed out after {}s: {}", timeout_secs, command),
            color,
        )],
        BuildEvent::StepFailed {
            document,
            index,
            code,
            stdout,
            stderr,
        } => {
            let mut lines = vec![error_line(
                &format!(
                    "when compiling \"{}\" (step {}, exit code {})",
                    document, index, code
                ),
                color,
            )];
            lines.extend(output_line(Level::Error, stderr));
            lines.extend(output_line(Level::Error, stdout));
            lines
        }
        BuildEvent::CompilerOutput { lines, .. } => lines
            .iter()
            .map(|line| Line::new(Level::Output, line.clone()))
            .collect(),
        BuildEvent::CompileFinished { .. } => Vec::new(),
        BuildEvent::DependencyUnreadable { path, message } => vec![error_line(
            &format!(
                "When searching for dependencies: could not read '{}' : {}",
                path, message
            ),
            color,
        )],
        BuildEvent::ModifiedTimeUnavailable {
            document,
            path,
            message,
        } => vec![error_line(
            &format!(
                "When getting modified times for {} : {}: {}",
                document, path, message
            ),
            color,
        )],
        BuildEvent::WatchStarted { documents } => render_watch_started(documents, color),
        BuildEvent::DocumentChanged { document } => {
            vec![render_document_changed(timestamp, document, color, unicode)]
        }
        BuildEvent::Shutdown => vec![render_shutdown(color)],
    }
}
