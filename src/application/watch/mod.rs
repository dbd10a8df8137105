//! Watch Use Case
//!
//! Polls the include graph of every document and recompiles the ones whose
//! sources changed.
//!
//! ## Architecture
//!
//! - `ChangeDetector` - Recomputes dependencies and compares modification times
//! - `Watcher` - Poll loop: detect, recompile, sleep until interrupted
//!
//! ## Usage
//!
//! ```ignore
//! let watcher = Watcher::new(pipeline, ChangeDetector::new(resolver), options);
//! watcher.run(&documents, &running, &|event| { ... })?;
//! ```

mod detector;
mod use_case;


pub use detector::ChangeDetector;
pub use use_case::{interruptible_sleep, WatchOptions, Watcher, SLEEP_SLICE};
