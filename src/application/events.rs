//! Build events
//!
//! Use cases report progress through a callback instead of printing, so the
//! binary can render the same stream as colored text or NDJSON.

use serde::Serialize;

/// Which captured stream a block of compiler output came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Progress and diagnostics emitted by the build engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildEvent {
    /// A compile step is about to run
    StepStarted {
        document: String,
        index: usize,
        total: usize,
        description: String,
    },
    /// A fully formatted command line is about to be executed
    CommandIssued { command: String },
    /// A command exceeded its timeout and its process group was terminated
    CommandTimedOut { command: String, timeout_secs: u64 },
    /// A compile step failed; remaining steps for the document are skipped
    StepFailed {
        document: String,
        index: usize,
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// Condensed compiler output after a successful build
    CompilerOutput {
        document: String,
        stream: OutputStream,
        lines: Vec<String>,
    },
    /// A build finished
    CompileFinished { document: String, success: bool },
    /// A file could not be read while scanning for includes
    DependencyUnreadable { path: String, message: String },
    /// A modification time could not be read
    ModifiedTimeUnavailable {
        document: String,
        path: String,
        message: String,
    },
    /// Watch mode started
    WatchStarted { documents: Vec<String> },
    /// A watched document needs rebuilding
    DocumentChanged { document: String },
    /// Watch mode ended on interrupt
    Shutdown,
}

impl BuildEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Whether this event reports a problem (rendered on stderr)
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            BuildEvent::CommandTimedOut { .. }
                | BuildEvent::StepFailed { .. }
                | BuildEvent::DependencyUnreadable { .. }
                | BuildEvent::ModifiedTimeUnavailable { .. }
        )
    }
}
