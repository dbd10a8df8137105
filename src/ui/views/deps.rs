use texmgr::domain::services::Dependencies;
use texmgr::Document;

use crate::ui::views::{info_line, Level, Line};

/// Header line, then one sorted path per line
pub fn render_dependencies(document: &Document, deps: &Dependencies, color: bool) -> Vec<Line> {
    std::iter::once(info_line(&format!("Dependencies for {}:", document), color))
        .chain(
            deps.files
                .iter()
                .map(|path| Line::new(Level::Output, path.display().to_string())),
        )
        .collect()
}
