use anyhow::Result;
use texmgr::application::CleanUseCase;
use texmgr::{Document, LocalFs};

use super::App;

pub fn clean_document(app: &App, cleaner: &CleanUseCase<LocalFs>, document: &Document) {
    app.output.clean_started(document);
    let result = cleaner.execute(document);
    app.output.clean_result(&result, app.dry_run);
}

pub fn cmd_clean(app: &App, documents: &[Document]) -> Result<()> {
    let cleaner = app.cleaner();
    for document in documents {
        clean_document(app, &cleaner, document);
    }
    Ok(())
}
