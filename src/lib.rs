//! texmgr - LaTeX build manager
//!
//! Compiles documents through a multi-pass compiler sequence, removes build
//! artifacts, scaffolds new documents from templates, and watches include
//! graphs to rebuild documents whose sources changed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    BuildEvent, CleanOptions, CleanResult, CleanUseCase, CompileOutcome, CompilePipeline,
    Executor, Scaffolder, TemplateKind, Watcher,
};
pub use config::Config;
pub use domain::entities::{CompileSequence, CompileStep, Document};
pub use domain::services::{classify, format_command, DependencyResolver};
pub use error::{TexmgrError, TexmgrResult};
pub use infrastructure::{LocalFs, ShellRunner};

/// Program name used as the output prefix
pub const NAME: &str = "texmgr";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
