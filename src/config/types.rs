//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::{CleanOptions, TemplateKind, WatchOptions};
use crate::domain::entities::CompileSequence;
use crate::error::TexmgrResult;

use super::loader::{self, ConfigWarning};

/// Compiler invocation. `texfot` trims the log, `grep` highlights problems.
pub const DEFAULT_TEX_COMMAND: &str = r#"TEXINPUTS=./packages//:$TEXINPUTS texfot --tee=/dev/null --quiet --ignore="This is pdfTeX, Version" pdflatex -file-line-error -interaction=nonstopmode --enable-write18 --synctex=1 "{tex_file}" | grep --color=always -E "Warning|Missing|Undefined|Emergency|Fatal|$""#;

pub const DEFAULT_BIBTEX_COMMAND: &str = r#"bibtex "{file}""#;

pub const DEFAULT_EDITOR_COMMAND: &str = "codium {file_parent} && codium {tex_file}";

pub const DEFAULT_VIEWER_COMMAND: &str = "okular {pdf_file} &";

/// Artifacts removed by `--clean`, as `{base}.{ext}`
pub const DEFAULT_CLEAN_EXTENSIONS: &[&str] = &[
    "aux",
    "bak",
    "bbl",
    "blg",
    "fdb_latexmk",
    "func0.gnuplot",
    "func0.table",
    "fls",
    "log",
    "lof",
    "lot",
    "nav",
    "out",
    "snm",
    "synctex.gz",
    "synctez.gz",
    "toc",
    "vrb",
    "vtc",
];

pub const DEFAULT_CLEAN_FOLDERS: &[&str] = &["{file_parent}/_minted-{name}"];

/// External command templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "default_tex")]
    pub tex: String,

    #[serde(default = "default_bibtex")]
    pub bibtex: String,

    #[serde(default = "default_editor")]
    pub editor: String,

    #[serde(default = "default_viewer")]
    pub viewer: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            tex: default_tex(),
            bibtex: default_bibtex(),
            editor: default_editor(),
            viewer: default_viewer(),
        }
    }
}

fn default_tex() -> String {
    DEFAULT_TEX_COMMAND.to_string()
}

fn default_bibtex() -> String {
    DEFAULT_BIBTEX_COMMAND.to_string()
}

fn default_editor() -> String {
    DEFAULT_EDITOR_COMMAND.to_string()
}

fn default_viewer() -> String {
    DEFAULT_VIEWER_COMMAND.to_string()
}

/// Artifact removal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_folders")]
    pub folders: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            folders: default_folders(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_CLEAN_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_folders() -> Vec<String> {
    DEFAULT_CLEAN_FOLDERS.iter().map(|s| s.to_string()).collect()
}

/// Watch loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    1000
}

/// External process limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Custom scaffolding templates; built-ins are used when unset
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub document: Option<PathBuf>,

    #[serde(default)]
    pub beamer: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub clean: CleanConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub process: ProcessConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TexmgrResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TexmgrResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Find and load the effective config file, then apply environment overrides
    pub fn discover(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> TexmgrResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, working_dir)
    }

    /// Apply environment variable overrides (TEXMGR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.process.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.watch.poll_interval_ms)
    }

    /// Compile, bibliography, compile, compile
    pub fn full_sequence(&self) -> CompileSequence {
        CompileSequence::full(&self.commands.tex, &self.commands.bibtex)
    }

    /// Single pass used for watch-triggered rebuilds
    pub fn update_sequence(&self) -> CompileSequence {
        CompileSequence::update(&self.commands.tex)
    }

    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions::new(self.clean.extensions.clone(), self.clean.folders.clone())
    }

    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions {
            poll_interval: self.poll_interval(),
            sequence: self.update_sequence(),
        }
    }

    /// Configured template path for `kind`, if any
    pub fn template_path(&self, kind: TemplateKind) -> Option<&Path> {
        match kind {
            TemplateKind::Document => self.templates.document.as_deref(),
            TemplateKind::Beamer => self.templates.beamer.as_deref(),
        }
    }
}
