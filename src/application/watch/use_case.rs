//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::application::compile::CompilePipeline;
use crate::application::events::BuildEvent;
use crate::domain::entities::{CompileSequence, Document};
use crate::domain::ports::{CommandRunner, FileSystem};
use crate::error::TexmgrResult;

use super::detector::ChangeDetector;

/// Granularity at which a sleeping watcher notices an interrupt
pub const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Options for the watch loop
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Time between polls
    pub poll_interval: Duration,
    /// Steps used to rebuild an outdated document
    pub sequence: CompileSequence,
}

/// Watch Use Case
///
/// Rebuilds documents as their sources change until the running flag is
/// cleared.
pub struct Watcher<R: CommandRunner, FS: FileSystem> {
    pipeline: CompilePipeline<R>,
    detector: ChangeDetector<FS>,
    options: WatchOptions,
}

impl<R: CommandRunner, FS: FileSystem> Watcher<R, FS> {
    pub fn new(pipeline: CompilePipeline<R>, detector: ChangeDetector<FS>, options: WatchOptions) -> Self {
        Self {
            pipeline,
            detector,
            options,
        }
    }

    /// Poll once and rebuild everything that changed. Returns the rebuilt
    /// documents; the very first call only records a baseline.
    pub fn tick(
        &mut self,
        documents: &[Document],
        on_event: &impl Fn(BuildEvent),
    ) -> TexmgrResult<Vec<Document>> {
        let stale = self.detector.poll(documents, on_event);
        for document in &stale {
            on_event(BuildEvent::DocumentChanged {
                document: document.to_string(),
            });
            self.pipeline
                .compile(document, &self.options.sequence, on_event)?;
        }
        Ok(stale)
    }

    /// Block until `running` is cleared, polling every `poll_interval`.
    ///
    /// A compile failure only affects its document; runner errors end the
    /// loop.
    pub fn run(
        &mut self,
        documents: &[Document],
        running: &AtomicBool,
        on_event: &impl Fn(BuildEvent),
    ) -> TexmgrResult<()> {
        on_event(BuildEvent::WatchStarted {
            documents: documents.iter().map(Document::to_string).collect(),
        });

        self.tick(documents, on_event)?;

        while running.load(Ordering::SeqCst) {
            if !interruptible_sleep(self.options.poll_interval, running) {
                break;
            }
            self.tick(documents, on_event)?;
        }

        on_event(BuildEvent::Shutdown);
        Ok(())
    }
}

/// Sleep for `duration` in [`SLEEP_SLICE`] steps. Returns `false` as soon as
/// `running` is cleared.
pub fn interruptible_sleep(duration: Duration, running: &AtomicBool) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if !running.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep(SLEEP_SLICE.min(deadline - now));
    }
}
