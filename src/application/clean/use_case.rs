//! Clean Use Case
//!
//! Orchestrates artifact removal for one document.

use std::path::PathBuf;

use crate::domain::entities::Document;
use crate::domain::ports::FileSystem;
use crate::domain::services::format_command;

use super::result::CleanResult;

/// What to remove
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Artifact extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Folder patterns, expanded with the command placeholders
    pub folders: Vec<String>,
    /// Report only, remove nothing
    pub dry_run: bool,
}

impl CleanOptions {
    pub fn new(extensions: Vec<String>, folders: Vec<String>) -> Self {
        Self {
            extensions,
            folders,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Clean use case - removes build artifacts belonging to a document
pub struct CleanUseCase<FS: FileSystem> {
    fs: FS,
    options: CleanOptions,
}

impl<FS: FileSystem> CleanUseCase<FS> {
    pub fn new(fs: FS, options: CleanOptions) -> Self {
        Self { fs, options }
    }

    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Every artifact path this document could have, files first
    pub fn candidates(&self, document: &Document) -> Vec<(PathBuf, bool)> {
        let files = self
            .options
            .extensions
            .iter()
            .map(|ext| (document.artifact(ext.trim_start_matches('.')), false));
        let folders = self
            .options
            .folders
            .iter()
            .map(|pattern| (PathBuf::from(format_command(pattern, document)), true));
        files.chain(folders).collect()
    }

    /// Remove the document's artifacts. Absent artifacts are skipped without
    /// comment; failures are collected and never stop the sweep.
    pub fn execute(&self, document: &Document) -> CleanResult {
        let mut result = CleanResult::new(document.clone());

        for (path, is_folder) in self.candidates(document) {
            if !self.fs.exists(&path) {
                continue;
            }
            if self.options.dry_run {
                result.add_removed(path);
                continue;
            }

            let removed = if is_folder {
                self.fs.remove_all(&path)
            } else {
                self.fs.remove(&path)
            };

            match removed {
                Ok(()) => result.add_removed(path),
                Err(err) if err.is_not_found() => {}
                Err(err) => result.add_error(path, err.to_string()),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::{LocalFs, MemoryFs};
    use std::path::Path;

    fn options() -> CleanOptions {
        CleanOptions::new(
            vec!["aux".into(), "log".into(), "synctex.gz".into()],
            vec!["{file_parent}/_minted-{name}".into()],
        )
    }

    #[test]
    fn removes_only_matching_artifacts() {
        let fs = MemoryFs::new();
        fs.add("paper.tex", "");
        fs.add("paper.aux", "");
        fs.add("paper.synctex.gz", "");
        fs.add("other.aux", "");

        let result = CleanUseCase::new(&fs, options()).execute(&Document::new("paper.tex"));

        assert!(result.is_success());
        assert_eq!(
            result.removed,
            vec![PathBuf::from("paper.aux"), PathBuf::from("paper.synctex.gz")]
        );
        assert_eq!(
            fs.paths(),
            vec![PathBuf::from("other.aux"), PathBuf::from("paper.tex")]
        );
    }

    #[test]
    fn removes_minted_folder_next_to_document() {
        let fs = MemoryFs::new();
        fs.add("ch/intro.tex", "");
        fs.add("ch/_minted-intro/abc.pygtex", "");
        fs.add("ch/_minted-intro/def.pygtex", "");

        let result = CleanUseCase::new(&fs, options()).execute(&Document::new("ch/intro"));

        assert_eq!(result.removed, vec![PathBuf::from("ch/_minted-intro")]);
        assert_eq!(fs.paths(), vec![PathBuf::from("ch/intro.tex")]);
    }

    #[test]
    fn dry_run_reports_without_removing() {
        let fs = MemoryFs::new();
        fs.add("paper.log", "");

        let result = CleanUseCase::new(&fs, options().with_dry_run(true))
            .execute(&Document::new("paper"));

        assert_eq!(result.removed, vec![PathBuf::from("paper.log")]);
        assert!(fs.exists(Path::new("paper.log")));
    }

    #[test]
    fn removal_failure_is_reported_and_sweep_continues() {
        let fs = MemoryFs::new();
        fs.add("paper.aux", "");
        fs.add("paper.log", "");
        fs.add("notes.aux", "");
        fs.deny("paper.aux");

        let cleaner = CleanUseCase::new(&fs, options());
        let paper = cleaner.execute(&Document::new("paper"));
        let notes = cleaner.execute(&Document::new("notes"));

        assert!(!paper.is_success());
        assert_eq!(paper.errors.len(), 1);
        assert_eq!(paper.errors[0].path, PathBuf::from("paper.aux"));
        assert!(paper.errors[0].message.contains("paper.aux"));
        assert_eq!(paper.removed, vec![PathBuf::from("paper.log")]);

        assert!(notes.is_success());
        assert_eq!(notes.removed, vec![PathBuf::from("notes.aux")]);
        assert_eq!(fs.paths(), vec![PathBuf::from("paper.aux")]);
    }

    #[test]
    fn nothing_to_clean_is_success() {
        let fs = MemoryFs::new();
        let result = CleanUseCase::new(&fs, options()).execute(&Document::new("paper"));
        assert!(result.removed.is_empty());
        assert!(result.is_success());
    }

    #[test]
    fn cleans_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document::new(dir.path().join("paper"));
        std::fs::write(dir.path().join("paper.aux"), "").unwrap();
        std::fs::write(dir.path().join("other.aux"), "").unwrap();
        std::fs::create_dir(dir.path().join("_minted-paper")).unwrap();
        std::fs::write(dir.path().join("_minted-paper/x.pygtex"), "").unwrap();

        let result = CleanUseCase::new(LocalFs::new(), options()).execute(&doc);

        assert!(result.is_success());
        assert_eq!(result.removed.len(), 2);
        assert!(!dir.path().join("paper.aux").exists());
        assert!(!dir.path().join("_minted-paper").exists());
        assert!(dir.path().join("other.aux").exists());
    }
}
