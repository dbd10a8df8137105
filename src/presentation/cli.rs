//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - A single flat command: flags select the action, positional arguments
//!   are the documents
//! - `--clean-last` implies `--watch` and `--no-clean`; `--dry-run` implies
//!   printing commands

use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Small utility to compile, generate and clean LaTeX.
///
/// Compiles every file in the file list (default: all *.tex files in the
/// current directory). Compiles once, runs bibtex, then compiles twice.
#[derive(Parser, Debug)]
#[command(name = "texmgr")]
#[command(author, about, long_about)]
#[command(override_usage = "texmgr [--flags] [file list]")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Documents to act on; `.tex` is appended when missing
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Don't remove build files after compiling
    #[arg(short = 'n', long)]
    pub no_clean: bool,

    /// Don't compile, create files in the file list from the document template
    #[arg(short = 'i', long)]
    pub init: bool,

    /// Same as --init, but uses the beamer template
    #[arg(short = 'b', long)]
    pub init_beamer: bool,

    /// Don't compile, open tex files in the editor (can run with -i/-b)
    #[arg(short = 't', long)]
    pub open_tex: bool,

    /// Compile and open PDF files in the viewer
    #[arg(short = 'p', long)]
    pub open_pdf: bool,

    /// Watch the tex files and their dependencies, recompile on change
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// Only clean build files when the watcher is stopped
    #[arg(short = 'l', long)]
    pub clean_last: bool,

    /// Print the dependencies (\input{...}, \include{...}) of each file
    #[arg(short = 'f', long)]
    pub find_deps: bool,

    /// Don't compile, remove build files
    #[arg(short = 'c', long)]
    pub clean: bool,

    /// Print the commands called
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Don't show info messages (keeps tex output and error messages)
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Print the commands but don't run them
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Show version number
    #[arg(long)]
    pub version: bool,

    /// Emit events as newline-delimited JSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Configuration file (default: ./texmgr.toml, then the user config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Skip the post-build clean (also implied by --clean-last)
    pub fn skip_clean(&self) -> bool {
        self.no_clean || self.clean_last
    }

    /// Enter watch mode (also implied by --clean-last)
    pub fn watch_mode(&self) -> bool {
        self.watch || self.clean_last
    }

    /// Echo each command before it runs
    pub fn print_commands(&self) -> bool {
        self.verbose || self.dry_run
    }
}
