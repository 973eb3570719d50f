use anyhow::Result;
use colored::Colorize;

use crate::app::App;

pub fn login(app: &mut App, name: &str, email: &str) -> Result<()> {
    let user = app.dashboard.login(name, email)?;
    println!("{}", format!("Welcome, {}!", user.name).bright_green());
    Ok(())
}

pub fn logout(app: &mut App) -> Result<()> {
    app.dashboard.logout();
    println!("{}", "Signed out.".bright_black());
    Ok(())
}

pub fn whoami(app: &App) -> Result<()> {
    match app.dashboard.user() {
        Some(user) => println!("{} <{}>", user.name.bold(), user.email),
        None => println!("{}", "Not logged in".bright_black()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation_error_is_reported() {
        let mut app = App::in_memory();
        let err = login(&mut app, "Febri", "no-at-sign").unwrap_err();
        assert!(err.to_string().contains("email"));
        assert!(app.dashboard.user().is_none());
    }

    #[test]
    fn test_logout_clears_user() {
        let mut app = App::signed_in();
        logout(&mut app).unwrap();
        assert!(app.dashboard.user().is_none());
    }
}
