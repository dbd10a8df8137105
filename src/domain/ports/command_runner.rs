//! CommandRunner port - executes a shell command line with a timeout

use std::time::Duration;

use serde::Serialize;

use crate::error::TexmgrResult;

/// Exit code reported when a command was killed for exceeding its timeout
pub const TIMEOUT_EXIT_CODE: i32 = -1;

/// Outcome of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    /// Exit code (0 = success, [`TIMEOUT_EXIT_CODE`] = killed on timeout)
    pub code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl ProcessResult {
    pub fn new(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// A successful result with no output (what a dry run reports)
    pub fn empty_success() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    pub fn timed_out(&self) -> bool {
        self.code == TIMEOUT_EXIT_CODE
    }
}

/// Runs command lines through a shell
///
/// Implementations:
/// - `ShellRunner` - `sh -c` in its own process group
/// - test fakes that script results per command
pub trait CommandRunner {
    /// Run `command`, waiting at most `timeout` before terminating it.
    ///
    /// A timeout is not an error: it yields a result with
    /// [`TIMEOUT_EXIT_CODE`]. Errors are reserved for commands that cannot be
    /// started or cannot be reaped.
    fn run(&self, command: &str, timeout: Duration) -> TexmgrResult<ProcessResult>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &str, timeout: Duration) -> TexmgrResult<ProcessResult> {
        (**self).run(command, timeout)
    }
}
