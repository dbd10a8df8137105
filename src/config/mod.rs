//! Configuration module for texmgr
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TEXMGR_*)
//! 3. `--config <path>`, or `./texmgr.toml` in the working directory
//! 4. User config (`<config dir>/texmgr/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! The first config file found wins; files are not merged.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    CleanConfig, ColorMode, CommandsConfig, Config, OutputConfig, ProcessConfig, TemplatesConfig,
    WatchConfig, DEFAULT_BIBTEX_COMMAND, DEFAULT_CLEAN_EXTENSIONS, DEFAULT_CLEAN_FOLDERS,
    DEFAULT_EDITOR_COMMAND, DEFAULT_TEX_COMMAND, DEFAULT_VIEWER_COMMAND,
};
