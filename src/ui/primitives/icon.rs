use crossterm::style::{Color, Stylize};

use plantsafe::domain::value_objects::Severity;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Pending,
    Arrow,
    Tag,
}

impl Icon {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Danger => Icon::Error,
            Severity::Warning => Icon::Warning,
            Severity::Info => Icon::Info,
        }
    }

    /// Unicode and ASCII spellings of the glyph
    fn glyphs(&self) -> (&'static str, &'static str) {
        use theme::{icons, icons_ascii};
        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Info => (icons::INFO, icons_ascii::INFO),
            Icon::Pending => (icons::PENDING, icons_ascii::PENDING),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Tag => (icons::TAG, icons_ascii::TAG),
        }
    }

    fn color(&self) -> Color {
        match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Info | Icon::Tag => theme::colors::INFO,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
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
