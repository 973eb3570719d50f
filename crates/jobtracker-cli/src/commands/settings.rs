use anyhow::{Context, Result, bail};
use colored::Colorize;
use jobtracker_core::preferences::WallpaperChoice;
use jobtracker_infrastructure::wallpaper::image_to_data_url;

use crate::SettingsAction;
use crate::app::App;

/// Runs one settings action inside an open settings panel.
pub fn run(app: &mut App, action: Option<SettingsAction>) -> Result<()> {
    app.dashboard.open_settings();
    let result = apply(app, action.unwrap_or(SettingsAction::Show));
    app.dashboard.close_settings();
    result
}

fn apply(app: &mut App, action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Show => {
            show(app);
            Ok(())
        }
        SettingsAction::Theme { theme } => {
            app.dashboard.set_theme(theme);
            println!("Theme set to {} ({})", theme, app.dashboard.appearance());
            Ok(())
        }
        SettingsAction::Language { language } => {
            app.dashboard.set_language(language);
            println!("Language set to {}", language.label());
            Ok(())
        }
        SettingsAction::Wallpaper { choice, image } => {
            match (choice, image) {
                (WallpaperChoice::Custom, Some(path)) => {
                    let url = image_to_data_url(&path)
                        .with_context(|| format!("Cannot use {} as wallpaper", path.display()))?;
                    app.dashboard.set_custom_wallpaper(url);
                }
                (WallpaperChoice::Custom, None) => {
                    if app.dashboard.preferences().custom_wallpaper().is_empty() {
                        println!(
                            "{}",
                            "No custom image stored yet; pass --image PATH.".yellow()
                        );
                    }
                }
                (_, Some(_)) => bail!("--image only applies to the custom wallpaper"),
                (_, None) => {}
            }
            app.dashboard.set_wallpaper(choice);
            println!("Wallpaper set to {}", choice);
            Ok(())
        }
    }
}

fn show(app: &App) {
    let prefs = app.dashboard.preferences();
    let rows = [
        (
            "Theme",
            format!("{} ({})", prefs.theme(), app.dashboard.appearance()),
        ),
        (
            "Language",
            format!("{} ({})", prefs.language().label(), prefs.language()),
        ),
        (
            "Wallpaper",
            format!("{} ({})", prefs.wallpaper(), prefs.active_wallpaper().name()),
        ),
        (
            "User",
            app.dashboard
                .user()
                .map(|user| format!("{} <{}>", user.name, user.email))
                .unwrap_or_else(|| "not logged in".to_string()),
        ),
    ];
    for (label, value) in rows {
        println!("{:<10} {}", format!("{label}:").bold(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtracker_core::preferences::{Appearance, Language, Theme};
    use tempfile::TempDir;

    #[test]
    fn test_settings_panel_closes_after_action() {
        let mut app = App::in_memory();
        run(&mut app, Some(SettingsAction::Theme { theme: Theme::Dark })).unwrap();
        assert!(!app.dashboard.settings_modal().is_open());
        assert_eq!(app.dashboard.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_language_change() {
        let mut app = App::in_memory();
        run(
            &mut app,
            Some(SettingsAction::Language {
                language: Language::Id,
            }),
        )
        .unwrap();
        assert_eq!(app.dashboard.preferences().language(), Language::Id);
    }

    #[test]
    fn test_custom_wallpaper_from_image() {
        let temp_dir = TempDir::new().unwrap();
        let image = temp_dir.path().join("wall.png");
        std::fs::write(&image, [1, 2, 3]).unwrap();

        let mut app = App::in_memory();
        run(
            &mut app,
            Some(SettingsAction::Wallpaper {
                choice: WallpaperChoice::Custom,
                image: Some(image),
            }),
        )
        .unwrap();

        let prefs = app.dashboard.preferences();
        assert_eq!(prefs.wallpaper(), WallpaperChoice::Custom);
        assert_eq!(prefs.custom_wallpaper(), "data:image/png;base64,AQID");
    }

    #[test]
    fn test_image_without_custom_is_rejected() {
        let mut app = App::in_memory();
        let result = run(
            &mut app,
            Some(SettingsAction::Wallpaper {
                choice: WallpaperChoice::Beach,
                image: Some("wall.png".into()),
            }),
        );
        assert!(result.is_err());
        assert_eq!(app.dashboard.preferences().wallpaper(), WallpaperChoice::Auto);
    }
}
