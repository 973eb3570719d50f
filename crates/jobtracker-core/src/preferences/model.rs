//! Preference value types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::appearance::AppearanceProbe;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Effective light/dark appearance after resolving `Theme::System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolves to an appearance. `System` asks the probe on every call.
    pub fn resolve(self, probe: &dyn AppearanceProbe) -> Appearance {
        match self {
            Theme::Light => Appearance::Light,
            Theme::Dark => Appearance::Dark,
            Theme::System => probe.current(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    /// Human-readable language name, as shown in the settings panel.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Id => "Indonesia",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WallpaperChoice {
    #[default]
    Auto,
    Beach,
    Nature,
    Sky,
    Custom,
}

/// The wallpaper actually shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "image")]
pub enum ActiveWallpaper {
    Beach,
    Nature,
    Sky,
    /// Stored custom image reference; may be empty if none was uploaded.
    Custom(String),
}

impl ActiveWallpaper {
    pub fn name(&self) -> &'static str {
        match self {
            ActiveWallpaper::Beach => "beach",
            ActiveWallpaper::Nature => "nature",
            ActiveWallpaper::Sky => "sky",
            ActiveWallpaper::Custom(_) => "custom",
        }
    }
}

impl WallpaperChoice {
    /// Resolves the choice for a local wall-clock `hour` (0-23).
    ///
    /// `Auto` picks beach for [5, 12), nature for [12, 18), and sky otherwise.
    pub fn resolve(self, hour: u32, custom_image: &str) -> ActiveWallpaper {
        match self {
            WallpaperChoice::Beach => ActiveWallpaper::Beach,
            WallpaperChoice::Nature => ActiveWallpaper::Nature,
            WallpaperChoice::Sky => ActiveWallpaper::Sky,
            WallpaperChoice::Custom => ActiveWallpaper::Custom(custom_image.to_string()),
            WallpaperChoice::Auto => match hour {
                5..=11 => ActiveWallpaper::Beach,
                12..=17 => ActiveWallpaper::Nature,
                _ => ActiveWallpaper::Sky,
            },
        }
    }
}
