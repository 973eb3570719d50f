//! Durable key names. Each key holds one JSON document.

pub const JOBS: &str = "jobs";
pub const USER: &str = "user";
pub const THEME: &str = "theme";
pub const LANGUAGE: &str = "language";
pub const WALLPAPER: &str = "wallpaper";
pub const CUSTOM_WALLPAPER: &str = "customWallpaper";
