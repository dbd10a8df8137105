use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use texmgr::application::ChangeDetector;
use texmgr::{DependencyResolver, Document, LocalFs, Watcher};

use super::clean::cmd_clean;
use super::App;

/// Rebuild documents as their sources change until Ctrl+C
pub fn cmd_watch(app: &App, documents: &[Document], clean_last: bool) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install the Ctrl+C handler")?;

    let detector = ChangeDetector::new(DependencyResolver::new(LocalFs::new()));
    let mut watcher = Watcher::new(app.pipeline(), detector, app.config.watch_options());
    let watched = watcher.run(documents, &running, &|event| app.emit(event));

    if clean_last {
        cmd_clean(app, documents)?;
    }
    watched?;
    Ok(())
}
