//! Document scaffolding from templates

use std::path::{Path, PathBuf};

use crate::domain::entities::with_tex_ext;
use crate::domain::ports::FileSystem;
use crate::error::{TexmgrError, TexmgrResult};

const DOCUMENT_TEMPLATE: &str = include_str!("../../templates/document.tex");
const BEAMER_TEMPLATE: &str = include_str!("../../templates/beamer.tex");

/// Which built-in template to start from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Document,
    Beamer,
}

impl TemplateKind {
    /// File name used when the target is a directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Document => "document.tex",
            TemplateKind::Beamer => "beamer.tex",
        }
    }

    fn builtin(&self) -> &'static str {
        match self {
            TemplateKind::Document => DOCUMENT_TEMPLATE,
            TemplateKind::Beamer => BEAMER_TEMPLATE,
        }
    }
}

/// A loaded template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// File name appended to directory targets
    pub file_name: String,
    pub content: String,
}

impl Template {
    pub fn builtin(kind: TemplateKind) -> Self {
        Self {
            file_name: kind.file_name().to_string(),
            content: kind.builtin().to_string(),
        }
    }
}

/// Creates new documents from a template
pub struct Scaffolder<FS: FileSystem> {
    fs: FS,
    dry_run: bool,
}

impl<FS: FileSystem> Scaffolder<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs, dry_run: false }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Load the template for `kind`, from `custom` when configured
    pub fn load_template(&self, kind: TemplateKind, custom: Option<&Path>) -> TexmgrResult<Template> {
        let Some(path) = custom else {
            return Ok(Template::builtin(kind));
        };

        let content = self
            .fs
            .read(path)
            .map_err(|_| TexmgrError::TemplateNotFound {
                path: path.to_path_buf(),
            })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| kind.file_name().to_string());
        Ok(Template { file_name, content })
    }

    /// Where a new document for `requested` goes: directories get the
    /// template's file name, and `.tex` is appended if missing.
    pub fn target_path(&self, requested: &Path, template: &Template) -> PathBuf {
        if self.fs.is_dir(requested) {
            with_tex_ext(requested.join(&template.file_name))
        } else {
            with_tex_ext(requested)
        }
    }

    /// Write `template` to `target`. An existing file is only replaced when
    /// `confirm_overwrite` agrees.
    pub fn create(
        &self,
        target: &Path,
        template: &Template,
        confirm_overwrite: impl FnOnce(&Path) -> bool,
    ) -> TexmgrResult<()> {
        if self.fs.exists(target) && !confirm_overwrite(target) {
            return Err(TexmgrError::OverwriteDeclined {
                path: target.to_path_buf(),
            });
        }

        if self.dry_run {
            return Ok(());
        }

        self.fs
            .write(target, &template.content)
            .map_err(|err| std::io::Error::other(format!("{}: {}", target.display(), err)))?;
        Ok(())
    }
}
