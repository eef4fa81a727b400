use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// Named glyph, resolved against the active glyph table at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Inactive,
    Hint,
    Add,
    Remove,
    Update,
    Sync,
    Status,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let g = theme::glyphs(supports_unicode);
        match self {
            Icon::Success => g.success,
            Icon::Error => g.error,
            Icon::Warning => g.warning,
            Icon::Inactive => g.inactive,
            Icon::Hint => g.hint,
            Icon::Add => g.add,
            Icon::Remove => g.remove,
            Icon::Update => g.update,
            Icon::Sync => g.sync,
            Icon::Status => g.status,
        }
    }

    fn color(&self) -> Color {
        match self {
            Icon::Success | Icon::Add => theme::colors::SUCCESS,
            Icon::Error | Icon::Remove => theme::colors::ERROR,
            Icon::Warning | Icon::Update => theme::colors::WARNING,
            Icon::Inactive | Icon::Hint => theme::colors::DIM,
            Icon::Sync | Icon::Status => theme::colors::INFO,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
