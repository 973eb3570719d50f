//! Persisted preference state.

use chrono::{Local, Timelike};

use super::appearance::AppearanceProbe;
use super::model::{ActiveWallpaper, Appearance, Language, Theme, WallpaperChoice};
use crate::storage::{PersistentStore, keys};

/// Theme, language, and wallpaper preferences.
///
/// Each value is an independent key: loaded once at startup, written back
/// by its own setter. A missing or malformed key falls back to its default
/// (`system`, `en`, `auto`, no custom image).
#[derive(Debug, Clone)]
pub struct Preferences {
    theme: Theme,
    language: Language,
    wallpaper: WallpaperChoice,
    custom_wallpaper: String,
    store: PersistentStore,
}

impl Preferences {
    pub fn load(store: PersistentStore) -> Self {
        Self {
            theme: store.get(keys::THEME, Theme::default()),
            language: store.get(keys::LANGUAGE, Language::default()),
            wallpaper: store.get(keys::WALLPAPER, WallpaperChoice::default()),
            custom_wallpaper: store.get(keys::CUSTOM_WALLPAPER, String::new()),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn wallpaper(&self) -> WallpaperChoice {
        self.wallpaper
    }

    pub fn custom_wallpaper(&self) -> &str {
        &self.custom_wallpaper
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(keys::THEME, &theme);
        tracing::debug!(%theme, "Theme changed");
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.store.set(keys::LANGUAGE, &language);
        tracing::debug!(%language, "Language changed");
    }

    pub fn set_wallpaper(&mut self, wallpaper: WallpaperChoice) {
        self.wallpaper = wallpaper;
        self.store.set(keys::WALLPAPER, &wallpaper);
        tracing::debug!(%wallpaper, "Wallpaper changed");
    }

    /// Stores a custom image reference (typically a `data:` URL).
    pub fn set_custom_wallpaper(&mut self, image: impl Into<String>) {
        self.custom_wallpaper = image.into();
        self.store.set(keys::CUSTOM_WALLPAPER, &self.custom_wallpaper);
        tracing::debug!(bytes = self.custom_wallpaper.len(), "Custom wallpaper changed");
    }

    /// Effective appearance, re-evaluated against the probe on every call.
    pub fn appearance(&self, probe: &dyn AppearanceProbe) -> Appearance {
        self.theme.resolve(probe)
    }

    pub fn active_wallpaper_at(&self, hour: u32) -> ActiveWallpaper {
        self.wallpaper.resolve(hour, &self.custom_wallpaper)
    }

    /// Active wallpaper for the current local hour.
    pub fn active_wallpaper(&self) -> ActiveWallpaper {
        self.active_wallpaper_at(Local::now().hour())
    }
}
