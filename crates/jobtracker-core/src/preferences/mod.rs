//! Personalization preferences.
//!
//! # Module Structure
//!
//! - `model`: theme, language, and wallpaper choices and their resolved forms
//! - `appearance`: the platform light/dark signal used by `Theme::System`
//! - `service`: `Preferences`, each value persisted under its own key

mod appearance;
mod model;
mod service;

// Re-export public API
pub use appearance::{AppearanceProbe, FixedAppearance};
pub use model::{ActiveWallpaper, Appearance, Language, Theme, WallpaperChoice};
pub use service::Preferences;
