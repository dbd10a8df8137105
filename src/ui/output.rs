//! Routing of rendered lines to stdout/stderr or NDJSON

use std::path::Path;

use serde_json::json;
use texmgr::application::{BuildEvent, CleanResult};
use texmgr::config::ConfigWarning;
use texmgr::domain::services::Dependencies;
use texmgr::Document;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::{self, Level, Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Prints everything the CLI shows, honoring `--silent`, `--verbose`,
/// `--dry-run` and `--json`
#[derive(Debug, Clone, Copy)]
pub struct Output {
    ui: UiContext,
}

impl Output {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Where a line of `level` goes, or `None` when it is filtered out
    pub fn route(&self, level: Level) -> Option<Stream> {
        match level {
            Level::Info if self.ui.silent => None,
            Level::Command if !self.ui.print_commands => None,
            Level::Info | Level::Command | Level::Output => Some(Stream::Stdout),
            Level::Error => Some(Stream::Stderr),
        }
    }

    pub fn lines(&self, lines: &[Line]) {
        for line in lines {
            match self.route(line.level) {
                Some(Stream::Stdout) => println!("{}", line.text),
                Some(Stream::Stderr) => eprintln!("{}", line.text),
                None => {}
            }
        }
    }

    pub fn info(&self, msg: &str) {
        if self.ui.json {
            if !self.ui.silent {
                self.emit(&json!({ "event": "info", "message": msg }));
            }
            return;
        }
        self.lines(&[views::info_line(msg, self.ui.color)]);
    }

    /// Captured output of a failed helper command, after the error line
    pub fn process_failure(&self, context: &str, stdout: &str, stderr: &str) {
        if self.ui.json {
            self.emit(&json!({
                "event": "error",
                "message": context,
                "stdout": stdout,
                "stderr": stderr,
            }));
            return;
        }
        let mut lines = vec![views::error_line(context, self.ui.color)];
        lines.extend(views::output_line(Level::Error, stderr));
        lines.extend(views::output_line(Level::Error, stdout));
        self.lines(&lines);
    }

    pub fn event(&self, event: &BuildEvent) {
        if self.ui.json {
            let hidden = match event {
                BuildEvent::CommandIssued { .. } => !self.ui.print_commands,
                BuildEvent::StepStarted { .. }
                | BuildEvent::WatchStarted { .. }
                | BuildEvent::Shutdown => self.ui.silent,
                _ => false,
            };
            if !hidden {
                self.emit(event);
            }
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.lines(&views::build::render_event(
            event,
            &timestamp,
            self.ui.color,
            self.ui.unicode,
        ));
    }

    pub fn clean_started(&self, document: &Document) {
        if self.ui.json {
            return;
        }
        self.lines(&[views::clean::render_clean_start(document, self.ui.color)]);
    }

    pub fn clean_result(&self, result: &CleanResult, dry_run: bool) {
        if self.ui.json {
            let errors: Vec<_> = result
                .errors
                .iter()
                .map(|e| json!({ "path": e.path, "message": e.message }))
                .collect();
            self.emit(&json!({
                "event": "clean",
                "document": result.document.to_string(),
                "removed": result.removed,
                "errors": errors,
                "dry_run": dry_run,
            }));
            return;
        }
        self.lines(&views::clean::render_clean_result(
            result,
            dry_run,
            self.ui.color,
            self.ui.unicode,
        ));
    }

    pub fn dependencies(&self, document: &Document, deps: &Dependencies) {
        if self.ui.json {
            self.emit(&json!({
                "event": "dependencies",
                "document": document.to_string(),
                "files": deps.files,
            }));
            return;
        }
        self.lines(&views::deps::render_dependencies(
            document,
            deps,
            self.ui.color,
        ));
    }

    pub fn config_warnings(&self, warnings: &[ConfigWarning]) {
        for w in warnings {
            if self.ui.json {
                self.emit(&json!({
                    "event": "config_warning",
                    "key": w.key,
                    "file": w.file,
                    "line": w.line,
                    "suggestion": w.suggestion,
                }));
                continue;
            }
            eprintln!("{}", format_config_warning(w, self.ui.color, self.ui.unicode));
        }
    }

    fn emit(&self, value: &impl serde::Serialize) {
        let _ = crate::ui::json::emit(value);
    }
}

pub fn format_config_warning(w: &ConfigWarning, color: bool, unicode: bool) -> String {
    let location = location(&w.file, w.line);
    let mut text = format!(
        "{} {}",
        Icon::Warning.colored(color, unicode),
        ColoredText::warning(format!("Unknown config key '{}' in {}", w.key, location))
            .render(color)
    );
    if let Some(suggestion) = &w.suggestion {
        text.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    text
}

fn location(file: &Path, line: Option<usize>) -> String {
    match line {
        Some(line) => format!("{}:{}", file.display(), line),
        None => file.display().to_string(),
    }
}
