//! Document Entity
//!
//! A document is identified by its path. Every path handed to texmgr is
//! coerced to carry the `.tex` extension, and all derived names (base name,
//! parent directory, PDF output) are computed from that coerced path.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Extension of typesetting sources
pub const TEX_EXTENSION: &str = ".tex";

/// Extension of the compiled output
pub const PDF_EXTENSION: &str = ".pdf";

/// Append `.tex` unless the path already ends with it.
///
/// Idempotent: `with_tex_ext(with_tex_ext(p)) == with_tex_ext(p)`.
pub fn with_tex_ext(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.to_string_lossy().ends_with(TEX_EXTENSION) {
        return path.to_path_buf();
    }
    let mut raw = OsString::from(path.as_os_str());
    raw.push(TEX_EXTENSION);
    PathBuf::from(raw)
}

/// A LaTeX source document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    /// Create a document, coercing the path to end with `.tex`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: with_tex_ext(path),
        }
    }

    /// Full path including the `.tex` extension
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path without the `.tex` extension (`chapters/intro.tex` -> `chapters/intro`)
    pub fn base_name(&self) -> String {
        let full = self.path.to_string_lossy();
        full.strip_suffix(TEX_EXTENSION)
            .unwrap_or(&full)
            .to_string()
    }

    /// File name without directory or extension (`chapters/intro.tex` -> `intro`)
    pub fn stem(&self) -> String {
        let base = self.base_name();
        Path::new(&base)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or(base)
    }

    /// Parent directory, `.` when the path has no directory component
    pub fn parent_dir(&self) -> PathBuf {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Path of the PDF produced by compiling this document
    pub fn pdf_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.base_name(), PDF_EXTENSION))
    }

    /// Path of a generated artifact: `{base}.{extension}`
    pub fn artifact(&self, extension: &str) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.base_name(), extension))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
