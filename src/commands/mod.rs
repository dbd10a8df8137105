//! Command handlers for the `texmgr` binary
//!
//! Each handler wires the library use cases to the shell runner, the local
//! file system and [`Output`].

pub mod build;
pub mod clean;
pub mod deps;
pub mod init;
pub mod open;
pub mod watch;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use texmgr::application::{BuildEvent, CleanUseCase, CompilePipeline, Executor};
use texmgr::domain::entities::TEX_EXTENSION;
use texmgr::{Config, Document, LocalFs, ShellRunner};

use crate::ui::output::Output;

/// Settings shared by every command of one invocation
pub struct App {
    pub config: Config,
    pub output: Output,
    pub dry_run: bool,
}

impl App {
    pub fn new(config: Config, output: Output, dry_run: bool) -> Self {
        Self {
            config,
            output,
            dry_run,
        }
    }

    pub fn executor(&self) -> Executor<ShellRunner> {
        Executor::new(ShellRunner::new(), self.config.timeout()).with_dry_run(self.dry_run)
    }

    pub fn pipeline(&self) -> CompilePipeline<ShellRunner> {
        CompilePipeline::new(self.executor())
    }

    pub fn cleaner(&self) -> CleanUseCase<LocalFs> {
        CleanUseCase::new(
            LocalFs::new(),
            self.config.clean_options().with_dry_run(self.dry_run),
        )
    }

    pub fn emit(&self, event: BuildEvent) {
        self.output.event(&event);
    }
}

/// Every `*.tex` file directly inside `dir`, sorted by name
pub fn discover_documents(dir: &Path) -> Result<Vec<Document>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("could not list \"{}\"", dir.display()))?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("could not list \"{}\"", dir.display()))?;
        let name = entry.file_name();
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && name.to_string_lossy().ends_with(TEX_EXTENSION) {
            documents.push(Document::new(name));
        }
    }
    documents.sort();
    Ok(documents)
}
