pub mod clock;
pub mod jobs;
mod session;
mod settings;
pub mod shell;

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

use crate::Commands;
use crate::app::App;

/// How destructive actions are confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Ask on stdin before returning.
    OneShot,
    /// Leave the confirmation staged; the shell resolves it with the next line.
    Shell,
}

/// Dispatches one parsed command against the dashboard.
pub async fn run(app: &mut App, command: Commands, mode: Mode) -> Result<()> {
    if command.requires_login() && app.dashboard.user().is_none() {
        bail!("Not logged in. Run `jobtracker login --name <NAME> --email <EMAIL>` first.");
    }

    match command {
        Commands::Login { name, email } => session::login(app, &name, &email),
        Commands::Logout => session::logout(app),
        Commands::Whoami => session::whoami(app),
        Commands::Add(fields) => jobs::add(app, fields),
        Commands::Edit { id, fields } => jobs::edit(app, &id, fields),
        Commands::List { search } => jobs::list(app, search),
        Commands::Archived => jobs::archived(app),
        Commands::Summary => jobs::summary(app),
        Commands::Favorite { id } => jobs::favorite(app, &id),
        Commands::Archive { id } => jobs::archive(app, &id),
        Commands::Unarchive { id } => jobs::unarchive(app, &id),
        Commands::Delete { id, yes } => jobs::delete(app, &id, yes, mode),
        Commands::Reset { yes } => jobs::reset(app, yes, mode),
        Commands::Export { output } => jobs::export(app, output),
        Commands::Settings { action } => settings::run(app, action),
        Commands::Clock { ticks } => clock::run(app, ticks).await,
        Commands::Shell => bail!("Already in the shell"),
    }
}

/// Classifies a confirmation answer: `Some(true)` for yes, `Some(false)` for
/// no, `None` for anything else.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Asks a yes/no question on stdin. End of input counts as no.
fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    loop {
        print!("{question} (yes/no) ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(false);
        }
        if let Some(answer) = parse_answer(&line) {
            return Ok(answer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("yes"), Some(true));
        assert_eq!(parse_answer(" Y \n"), Some(true));
        assert_eq!(parse_answer("NO"), Some(false));
        assert_eq!(parse_answer("maybe"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[tokio::test]
    async fn test_commands_require_login() {
        let mut app = App::in_memory();
        let err = run(&mut app, Commands::Summary, Mode::Shell)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Not logged in"));

        run(&mut app, Commands::Whoami, Mode::Shell).await.unwrap();
        run(
            &mut app,
            Commands::Login {
                name: "Febri".to_string(),
                email: "febri@example.com".to_string(),
            },
            Mode::Shell,
        )
        .await
        .unwrap();
        run(&mut app, Commands::Summary, Mode::Shell).await.unwrap();
    }

    #[tokio::test]
    async fn test_shell_is_not_nested() {
        let mut app = App::signed_in();
        assert!(run(&mut app, Commands::Shell, Mode::Shell).await.is_err());
    }
}
