use anyhow::Result;
use texmgr::Document;

use super::App;

/// Run a helper command for `document`; a non-zero exit is reported with
/// `context` and its captured output. Returns whether it succeeded.
fn run_reported(app: &App, template: &str, document: &Document, context: &str) -> Result<bool> {
    let result = app
        .executor()
        .format_and_run(template, document, &|event| app.emit(event))?;

    if result.is_success() {
        return Ok(true);
    }
    app.output
        .process_failure(context, &result.stdout, &result.stderr);
    Ok(false)
}

pub fn open_editor(app: &App, document: &Document) -> Result<bool> {
    run_reported(
        app,
        &app.config.commands.editor,
        document,
        &format!("when opening editor for \"{}\"", document),
    )
}

pub fn open_pdf(app: &App, document: &Document) -> Result<bool> {
    run_reported(
        app,
        &app.config.commands.viewer,
        document,
        &format!("when opening pdf file \"{}\"", document),
    )
}

/// Open every document in the editor; failures are reported, not fatal
pub fn cmd_open_tex(app: &App, documents: &[Document]) -> Result<()> {
    for document in documents {
        open_editor(app, document)?;
    }
    Ok(())
}

pub fn cmd_open_pdf(app: &App, documents: &[Document]) -> Result<()> {
    for document in documents {
        open_pdf(app, document)?;
    }
    Ok(())
}
