use crate::ui::primitives::text::ColoredText;

pub fn render_version(color: bool) -> String {
    format!(
        "{} version {}",
        ColoredText::accent(texmgr::NAME).render(color),
        texmgr::VERSION
    )
}
