use anyhow::Result;
use texmgr::application::BuildEvent;
use texmgr::{DependencyResolver, Document, LocalFs};

use super::App;

/// Print the transitive include set of each document
pub fn cmd_find_deps(app: &App, documents: &[Document]) -> Result<()> {
    let resolver = DependencyResolver::new(LocalFs::new());

    for document in documents {
        let deps = resolver.resolve(document.path());
        for failure in &deps.unreadable {
            app.emit(BuildEvent::DependencyUnreadable {
                path: failure.path.display().to_string(),
                message: failure.message.clone(),
            });
        }
        app.output.dependencies(document, &deps);
    }
    Ok(())
}
