//! Clean result types

use std::path::PathBuf;

use crate::domain::entities::Document;

/// A path that could not be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of cleaning one document
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// The document whose artifacts were considered
    pub document: Document,
    /// Paths that were removed (or would be removed in dry run)
    pub removed: Vec<PathBuf>,
    /// Removal failures; cleaning continues past them
    pub errors: Vec<CleanFailure>,
}

impl CleanResult {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            removed: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub fn add_error(&mut self, path: PathBuf, message: impl Into<String>) {
        self.errors.push(CleanFailure {
            path,
            message: message.into(),
        });
    }

    /// Check if every existing artifact was removed
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
