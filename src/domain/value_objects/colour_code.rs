//! Colour Code Value Object
//!
//! Lifting gear carries a coloured tag showing the quarter in which it was
//! last thoroughly examined. The stored tag is never corrected automatically;
//! the compliance engine only reports when it differs from the current quarter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Quarterly inspection tag colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourCode {
    /// Q1: January to March
    Green,
    /// Q2: April to June
    Yellow,
    /// Q3: July to September
    Red,
    /// Q4: October to December
    Blue,
}

impl ColourCode {
    pub const ALL: [ColourCode; 4] = [
        ColourCode::Green,
        ColourCode::Yellow,
        ColourCode::Red,
        ColourCode::Blue,
    ];

    /// Colour for a zero-based calendar month (0 = January).
    ///
    /// Months past 11 are clamped into Q4.
    pub fn for_month0(month0: u32) -> Self {
        match month0 {
            0..=2 => ColourCode::Green,
            3..=5 => ColourCode::Yellow,
            6..=8 => ColourCode::Red,
            _ => ColourCode::Blue,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColourCode::Green => "green",
            ColourCode::Yellow => "yellow",
            ColourCode::Red => "red",
            ColourCode::Blue => "blue",
        }
    }

    /// Human label of the quarter this colour stands for
    pub fn quarter_label(&self) -> &'static str {
        match self {
            ColourCode::Green => "Q1 — Jan / Feb / Mar",
            ColourCode::Yellow => "Q2 — Apr / May / Jun",
            ColourCode::Red => "Q3 — Jul / Aug / Sep",
            ColourCode::Blue => "Q4 — Oct / Nov / Dec",
        }
    }

    /// Swatch used when printing tags
    pub fn hex(&self) -> &'static str {
        match self {
            ColourCode::Green => "#2E7D52",
            ColourCode::Yellow => "#C9A84C",
            ColourCode::Red => "#CC3333",
            ColourCode::Blue => "#2255AA",
        }
    }

    /// The colour of the preceding quarter
    pub fn previous(&self) -> Self {
        match self {
            ColourCode::Green => ColourCode::Blue,
            ColourCode::Yellow => ColourCode::Green,
            ColourCode::Red => ColourCode::Yellow,
            ColourCode::Blue => ColourCode::Red,
        }
    }
}

impl fmt::Display for ColourCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown colour code '{0}' (expected green, yellow, red or blue)")]
pub struct UnknownColourCode(pub String);

impl FromStr for ColourCode {
    type Err = UnknownColourCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" => Ok(ColourCode::Green),
            "yellow" => Ok(ColourCode::Yellow),
            "red" => Ok(ColourCode::Red),
            "blue" => Ok(ColourCode::Blue),
            _ => Err(UnknownColourCode(s.to_string())),
        }
    }
}
