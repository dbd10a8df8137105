//! Command execution shared by every use case that shells out
//!
//! Adds dry-run handling and event reporting on top of a raw
//! [`CommandRunner`].

use std::time::Duration;

use crate::domain::entities::Document;
use crate::domain::ports::{CommandRunner, ProcessResult};
use crate::domain::services::format_command;
use crate::error::TexmgrResult;

use super::events::BuildEvent;

/// Runs formatted commands, or only announces them in dry-run mode
#[derive(Debug, Clone)]
pub struct Executor<R: CommandRunner> {
    runner: R,
    timeout: Duration,
    dry_run: bool,
}

impl<R: CommandRunner> Executor<R> {
    pub fn new(runner: R, timeout: Duration) -> Self {
        Self {
            runner,
            timeout,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Announce and run `command`. A dry run never spawns and reports success.
    pub fn run(&self, command: &str, on_event: &impl Fn(BuildEvent)) -> TexmgrResult<ProcessResult> {
        on_event(BuildEvent::CommandIssued {
            command: command.to_string(),
        });

        if self.dry_run {
            return Ok(ProcessResult::empty_success());
        }

        let result = self.runner.run(command, self.timeout)?;
        if result.timed_out() {
            on_event(BuildEvent::CommandTimedOut {
                command: command.to_string(),
                timeout_secs: self.timeout.as_secs(),
            });
        }
        Ok(result)
    }

    /// Format `template` against `document`, then [`run`](Self::run) it
    pub fn format_and_run(
        &self,
        template: &str,
        document: &Document,
        on_event: &impl Fn(BuildEvent),
    ) -> TexmgrResult<ProcessResult> {
        self.run(&format_command(template, document), on_event)
    }
}
