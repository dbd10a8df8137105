//! Include-graph discovery
//!
//! Finds every file a document pulls in through `\input{...}` or
//! `\include{...}`, transitively. Names are resolved the way LaTeX resolves
//! them: relative to the working directory the compiler runs in.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::with_tex_ext;
use crate::domain::ports::FileSystem;

fn include_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\\(?:input|include)\{([^\\{}]*)\}").expect("include pattern is valid")
    })
}

/// A file that could not be read while scanning for includes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Transitive dependency set of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    /// Every reachable file, the root included
    pub files: BTreeSet<PathBuf>,
    /// Files that were treated as empty because they could not be read
    pub unreadable: Vec<ReadFailure>,
}

impl Dependencies {
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

/// Walks `\input` / `\include` directives
#[derive(Debug, Clone)]
pub struct DependencyResolver<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> DependencyResolver<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn file_system(&self) -> &FS {
        &self.fs
    }

    /// Collect every file reachable from `root`, including `root` itself.
    ///
    /// Each call starts from an empty visited set, so results never leak
    /// between documents or watch ticks.
    pub fn resolve(&self, root: &Path) -> Dependencies {
        let mut deps = Dependencies::default();
        self.visit(root, &mut deps);
        deps
    }

    fn visit(&self, path: &Path, deps: &mut Dependencies) {
        if !deps.files.insert(path.to_path_buf()) {
            return;
        }

        let contents = match self.fs.read(path) {
            Ok(contents) => contents,
            Err(err) => {
                deps.unreadable.push(ReadFailure {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
                String::new()
            }
        };

        for include in find_includes(&contents) {
            self.visit(&include, deps);
        }
    }
}

/// Remove `%` comments, honouring `\%` escapes.
pub fn strip_comments(contents: &str) -> String {
    let mut out = String::with_capacity(contents.len());
    for (i, line) in contents.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(strip_line_comment(line));
    }
    out
}

fn strip_line_comment(line: &str) -> &str {
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '\\' => escaped = !escaped,
            '%' if !escaped => return &line[..idx],
            _ => escaped = false,
        }
    }
    line
}

/// Include targets named in `contents`, each coerced to `.tex`, in order of
/// appearance. Commented-out directives are ignored.
pub fn find_includes(contents: &str) -> Vec<PathBuf> {
    let stripped = strip_comments(contents);
    include_pattern()
        .captures_iter(&stripped)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .filter(|name| !name.is_empty())
        .map(with_tex_ext)
        .collect()
}
