//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Reports progress as `BuildEvent`s instead of printing
//!
//! ## Use Cases
//!
//! - `CompilePipeline` - Runs the multi-pass compile sequence for a document
//! - `CleanUseCase` - Removes build artifacts
//! - `Watcher` - Polls include graphs and recompiles changed documents
//! - `Scaffolder` - Creates documents from templates

pub mod clean;
pub mod compile;
pub mod events;
pub mod executor;
pub mod init;
pub mod watch;

pub use clean::{CleanFailure, CleanOptions, CleanResult, CleanUseCase};
pub use compile::{CompileOutcome, CompilePipeline};
pub use events::{BuildEvent, OutputStream};
pub use executor::Executor;
pub use init::{Scaffolder, Template, TemplateKind};
pub use watch::{interruptible_sleep, ChangeDetector, WatchOptions, Watcher, SLEEP_SLICE};
