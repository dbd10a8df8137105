use crossterm::style::Color;

/// Design tokens for texmgr output.
///
/// Every color and icon printed by the CLI comes from this module.
pub mod colors {
    use super::Color;

    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
    /// Program-name prefix on info lines
    pub const ACCENT: Color = Color::DarkYellow;
}

pub mod icons {
    pub const WARNING: &str = "⚠";
    pub const WATCH: &str = "⟳";
    pub const TRASH: &str = "🗑";
}

pub mod icons_ascii {
    pub const WARNING: &str = "[WARN]";
    pub const WATCH: &str = "[~]";
    pub const TRASH: &str = "[DEL]";
}
