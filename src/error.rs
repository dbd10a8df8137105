//! Error types for texmgr
//!
//! Library code returns `TexmgrResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for texmgr operations
pub type TexmgrResult<T> = Result<T, TexmgrError>;

/// Main error type for texmgr operations
#[derive(Error, Debug)]
pub enum TexmgrError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The command could not be started at all
    #[error("failed to run command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process group survived the terminate signal past the second timeout
    #[error("command `{command}` did not exit after being terminated")]
    Unreaped { command: String },

    /// Template file for scaffolding is missing or unreadable
    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Scaffolding was declined at the overwrite prompt
    #[error("refused to overwrite {path}")]
    OverwriteDeclined { path: PathBuf },
}
