use anyhow::Result;
use texmgr::Document;

use super::clean::clean_document;
use super::App;

/// Full compile of every document, each followed by a clean unless skipped.
/// A failed compile only stops that document.
pub fn cmd_build(app: &App, documents: &[Document], skip_clean: bool) -> Result<()> {
    let pipeline = app.pipeline();
    let cleaner = app.cleaner();
    let sequence = app.config.full_sequence();

    for document in documents {
        pipeline.compile(document, &sequence, &|event| app.emit(event))?;
        if !skip_clean {
            clean_document(app, &cleaner, document);
        }
    }
    Ok(())
}
