//! Modification-time change detection

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::time::SystemTime;

use crate::application::events::BuildEvent;
use crate::domain::entities::Document;
use crate::domain::ports::FileSystem;
use crate::domain::services::DependencyResolver;

/// Remembers the modification time of every watched file between polls.
///
/// The first poll only records a baseline. After that a document is outdated
/// when any file in its include graph is newer than recorded, or was not in
/// the previous table at all (a newly included file).
pub struct ChangeDetector<FS: FileSystem> {
    resolver: DependencyResolver<FS>,
    table: Option<HashMap<PathBuf, SystemTime>>,
}

impl<FS: FileSystem> ChangeDetector<FS> {
    pub fn new(resolver: DependencyResolver<FS>) -> Self {
        Self {
            resolver,
            table: None,
        }
    }

    /// Whether a baseline has been recorded yet
    pub fn has_baseline(&self) -> bool {
        self.table.is_some()
    }

    /// Files currently tracked, sorted
    pub fn tracked(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .table
            .iter()
            .flat_map(|table| table.keys().cloned())
            .collect();
        files.sort();
        files
    }

    /// Recompute every include graph, replace the table, and return the
    /// outdated documents in sorted order.
    pub fn poll(&mut self, documents: &[Document], on_event: &impl Fn(BuildEvent)) -> Vec<Document> {
        let mut table = HashMap::new();
        let mut stale = BTreeSet::new();
        let mut unavailable = BTreeSet::new();

        for document in documents {
            let deps = self.resolver.resolve(document.path());
            for failure in &deps.unreadable {
                on_event(BuildEvent::DependencyUnreadable {
                    path: failure.path.display().to_string(),
                    message: failure.message.clone(),
                });
            }

            for file in &deps.files {
                if unavailable.contains(file) {
                    continue;
                }
                let modified = match table.get(file) {
                    Some(time) => *time,
                    None => match self.resolver.file_system().modified(file) {
                        Ok(time) => {
                            table.insert(file.clone(), time);
                            time
                        }
                        Err(err) => {
                            on_event(BuildEvent::ModifiedTimeUnavailable {
                                document: document.to_string(),
                                path: file.display().to_string(),
                                message: err.to_string(),
                            });
                            unavailable.insert(file.clone());
                            continue;
                        }
                    },
                };

                let changed = match &self.table {
                    Some(previous) => previous.get(file).map_or(true, |seen| modified > *seen),
                    None => false,
                };
                if changed {
                    stale.insert(document.clone());
                }
            }
        }

        self.table = Some(table);
        stale.into_iter().collect()
    }
}
