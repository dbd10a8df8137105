//! Compile Pipeline
//!
//! Runs a document through a [`CompileSequence`], stopping at the first
//! failed step.

use crate::domain::entities::{CompileSequence, Document};
use crate::domain::ports::CommandRunner;
use crate::domain::services::{classify, format_command, has_fatal_error};
use crate::error::TexmgrResult;

use super::events::{BuildEvent, OutputStream};
use super::executor::Executor;

/// How a compile ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Every step succeeded
    Success,
    /// The step with this 1-based index failed; later steps did not run
    Failed { step: usize },
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Success)
    }
}

/// Drives the external compiler through a step sequence
#[derive(Debug, Clone)]
pub struct CompilePipeline<R: CommandRunner> {
    executor: Executor<R>,
}

impl<R: CommandRunner> CompilePipeline<R> {
    pub fn new(executor: Executor<R>) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &Executor<R> {
        &self.executor
    }

    /// Compile `document` with `sequence`.
    ///
    /// A step fails when its exit code is non-zero or its stdout carries a
    /// fatal marker, unless the step tolerates failure. On success the last
    /// step's output is condensed and reported; on failure the raw output is
    /// attached to the `StepFailed` event instead.
    pub fn compile(
        &self,
        document: &Document,
        sequence: &CompileSequence,
        on_event: &impl Fn(BuildEvent),
    ) -> TexmgrResult<CompileOutcome> {
        let dry_run = self.executor.dry_run();
        let total = sequence.len();
        let mut last = None;

        for (i, step) in sequence.steps().iter().enumerate() {
            let index = i + 1;
            if !dry_run {
                on_event(BuildEvent::StepStarted {
                    document: document.to_string(),
                    index,
                    total,
                    description: format_command(&step.description, document),
                });
            }

            let result = self
                .executor
                .format_and_run(&step.command, document, on_event)?;

            let failed = !step.tolerate_failure
                && (!result.is_success() || has_fatal_error(&result.stdout));

            if failed {
                on_event(BuildEvent::StepFailed {
                    document: document.to_string(),
                    index,
                    // Exit 0 with a fatal marker still counts as a failure.
                    code: if result.is_success() { 1 } else { result.code },
                    stdout: result.stdout,
                    stderr: result.stderr,
                });
                on_event(BuildEvent::CompileFinished {
                    document: document.to_string(),
                    success: false,
                });
                return Ok(CompileOutcome::Failed { step: index });
            }

            last = Some(result);
        }

        if let Some(result) = last.filter(|_| !dry_run) {
            for (stream, text) in [
                (OutputStream::Stdout, &result.stdout),
                (OutputStream::Stderr, &result.stderr),
            ] {
                let condensed = classify(text);
                if !condensed.is_empty() {
                    on_event(BuildEvent::CompilerOutput {
                        document: document.to_string(),
                        stream,
                        lines: condensed.rendered_lines(),
                    });
                }
            }
        }

        on_event(BuildEvent::CompileFinished {
            document: document.to_string(),
            success: true,
        });
        Ok(CompileOutcome::Success)
    }
}
