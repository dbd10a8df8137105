//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the resolver, watcher, cleanup and scaffolding code run against the
//! local disk or an in-memory fake.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Last modification time
    fn modified(&self, path: &Path) -> FsResult<SystemTime>;

    /// Remove a single file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Remove a file or a whole directory tree
    fn remove_all(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        (**self).modified(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        (**self).remove(path)
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_all(path)
    }
}
