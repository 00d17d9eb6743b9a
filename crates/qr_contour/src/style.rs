//! Output styles.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Jitter amplitude of [`Style::JitterLight`], in grid units.
pub const JITTER_LIGHT: f32 = 0.07;

/// Jitter amplitude of [`Style::JitterHeavy`], in grid units.
pub const JITTER_HEAVY: f32 = 0.15;

/// Rendering style selecting the tracing path and the post-processing passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Style {
    /// Traced outlines with merged straight runs.
    #[default]
    Basic,
    /// Traced outlines with quarter-circle corners.
    Rounded,
    /// One circle per filled cell.
    Dots,
    /// One slightly rotated square tile per filled cell.
    Mosaic,
    /// Traced outlines with a small hand-drawn wobble.
    JitterLight,
    /// Traced outlines with a strong hand-drawn wobble.
    JitterHeavy,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Basic,
        Style::Rounded,
        Style::Dots,
        Style::Mosaic,
        Style::JitterLight,
        Style::JitterHeavy,
    ];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Style::Basic => "basic",
            Style::Rounded => "rounded",
            Style::Dots => "dots",
            Style::Mosaic => "mosaic",
            Style::JitterLight => "jitter-light",
            Style::JitterHeavy => "jitter-heavy",
        }
    }

    /// Per-axis jitter bound for the jitter styles.
    pub fn jitter_amplitude(self) -> Option<f32> {
        match self {
            Style::JitterLight => Some(JITTER_LIGHT),
            Style::JitterHeavy => Some(JITTER_HEAVY),
            _ => None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Parse a style name, case-insensitively, accepting `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Style::ALL
            .into_iter()
            .find(|style| style.name() == normalized)
            .ok_or_else(|| Error::UnsupportedStyle { name: s.to_owned() })
    }
}
