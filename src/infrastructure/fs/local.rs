//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::path::Path;
use std::time::SystemTime;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;
        }
        std::fs::write(path, content).map_err(|e| FsError::from_io(e, path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        std::fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|e| FsError::from_io(e, path))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        let meta = std::fs::symlink_metadata(path).map_err(|e| FsError::from_io(e, path))?;
        let result = if meta.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        result.map_err(|e| FsError::from_io(e, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.tex");
        let fs = LocalFs::new();

        fs.write(&file, "hello world").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, "hello world");
    }

    #[test]
    fn local_fs_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("dir").join("test.tex");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();

        assert!(file.exists());
    }

    #[test]
    fn local_fs_read_missing_reports_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing.tex");
        let err = LocalFs::new().read(&file).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing.tex"));
    }

    #[test]
    fn local_fs_modified() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("timed.tex");
        let fs = LocalFs::new();

        fs.write(&file, "x").unwrap();

        assert!(fs.modified(&file).is_ok());
        assert!(fs.modified(&dir.path().join("nope.tex")).is_err());
    }

    #[test]
    fn local_fs_remove_all_handles_files_and_dirs() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("_minted-paper");
        let fs = LocalFs::new();
        fs.write(&folder.join("cache.pygtex"), "x").unwrap();
        let file = dir.path().join("paper.aux");
        fs.write(&file, "x").unwrap();

        fs.remove_all(&folder).unwrap();
        fs.remove_all(&file).unwrap();

        assert!(!folder.exists());
        assert!(!file.exists());
        assert!(fs.remove_all(&file).unwrap_err().is_not_found());
    }
}
