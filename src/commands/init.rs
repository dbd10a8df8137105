use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use texmgr::application::{Scaffolder, TemplateKind};
use texmgr::{Document, LocalFs, TexmgrError};

use super::open::open_editor;
use super::App;

/// Create each requested file from the template, then optionally open it.
///
/// Declining an overwrite ends the whole run successfully; an editor
/// failure ends it with status 1.
pub fn cmd_init(
    app: &App,
    files: &[PathBuf],
    kind: TemplateKind,
    open_tex: bool,
) -> Result<ExitCode> {
    let scaffolder = Scaffolder::new(LocalFs::new()).with_dry_run(app.dry_run);
    let template = scaffolder.load_template(kind, app.config.template_path(kind))?;

    let requested = if files.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        files.to_vec()
    };

    for path in &requested {
        let target = scaffolder.target_path(path, &template);
        match scaffolder.create(&target, &template, confirm_overwrite) {
            Ok(()) => {}
            Err(TexmgrError::OverwriteDeclined { .. }) => return Ok(ExitCode::SUCCESS),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("when initializing file \"{}\"", target.display()))
            }
        }
        app.output
            .info(&format!("Created \"{}\"", target.display()));

        if open_tex && !open_editor(app, &Document::new(&target))? {
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Anything but an explicit yes keeps the file, including a closed stdin
fn confirm_overwrite(path: &Path) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "File \"{}\" already exists, overwrite with new LaTeX file?",
            path.display()
        ))
        .default(false)
        .interact()
        .unwrap_or(false)
}
