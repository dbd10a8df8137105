use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Warning,
    Watch,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};

        let (unicode, ascii) = match self {
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Watch => (icons::WATCH, icons_ascii::WATCH),
            Icon::Trash => (icons::TRASH, icons_ascii::TRASH),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Warning | Icon::Trash => theme::colors::WARNING,
            Icon::Watch => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
