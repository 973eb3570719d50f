//! Terminal light/dark detection.

use jobtracker_core::preferences::{Appearance, AppearanceProbe};

/// Reads the `COLORFGBG` variable many terminals export (`"15;0"` means
/// white on black).
///
/// The variable is re-read on every call. Terminals that do not set it are
/// treated as light.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalAppearance;

impl AppearanceProbe for TerminalAppearance {
    fn current(&self) -> Appearance {
        from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }
}

/// Classifies a `COLORFGBG` value by its background index.
///
/// Indices 0-6 and 8 are the dark ANSI colors.
pub fn from_colorfgbg(value: Option<&str>) -> Appearance {
    let background = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(0..=6 | 8) => Appearance::Dark,
        _ => Appearance::Light,
    }
}
