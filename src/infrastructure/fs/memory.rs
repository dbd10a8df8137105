//! In-memory FileSystem for unit tests
//!
//! Modification times are a logical clock advanced on every write, so
//! watcher tests never depend on filesystem timestamp granularity.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
pub(crate) struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, (String, SystemTime)>>,
    clock: Cell<u64>,
    denied: RefCell<Vec<PathBuf>>,
}

impl MemoryFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn tick(&self) -> SystemTime {
        self.clock.set(self.clock.get() + 1);
        SystemTime::UNIX_EPOCH + Duration::from_secs(self.clock.get())
    }

    /// Create or overwrite a file, bumping its modification time
    pub(crate) fn add(&self, path: impl AsRef<Path>, content: &str) {
        let time = self.tick();
        self.files
            .borrow_mut()
            .insert(path.as_ref().to_path_buf(), (content.to_string(), time));
    }

    /// Bump a file's modification time without changing its content
    pub(crate) fn touch(&self, path: impl AsRef<Path>) {
        let time = self.tick();
        if let Some(entry) = self.files.borrow_mut().get_mut(path.as_ref()) {
            entry.1 = time;
        }
    }

    /// Make reads and removals of a file fail with permission denied
    pub(crate) fn deny(&self, path: impl AsRef<Path>) {
        self.denied.borrow_mut().push(path.as_ref().to_path_buf());
    }

    fn check_access(&self, path: &Path) -> FsResult<()> {
        if self.denied.borrow().iter().any(|p| p == path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }

    pub(crate) fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.check_access(path)?;
        self.files
            .borrow()
            .get(path)
            .map(|(content, _)| content.clone())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.add(path, content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .borrow()
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        self.files
            .borrow()
            .get(path)
            .map(|(_, time)| *time)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        self.check_access(path)?;
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        let mut files = self.files.borrow_mut();
        let before = files.len();
        files.retain(|file, _| !file.starts_with(path));
        if files.len() == before {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }
}
