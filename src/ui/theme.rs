use crossterm::style::Color;

use plantsafe::domain::value_objects::ColourCode;

/// Design tokens for the plantsafe CLI.
///
/// Only these five semantic colors are used for UI chrome.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "ℹ";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";
    pub const TAG: &str = "●";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[!!]";
    pub const WARNING: &str = "[!]";
    pub const INFO: &str = "[i]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "->";
    pub const TAG: &str = "*";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Terminal approximation of a tag swatch
pub fn tag_color(colour: ColourCode) -> Color {
    match colour {
        ColourCode::Green => Color::Green,
        ColourCode::Yellow => Color::Yellow,
        ColourCode::Red => Color::Red,
        ColourCode::Blue => Color::Blue,
    }
}
