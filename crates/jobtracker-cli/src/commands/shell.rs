//! Interactive shell over one dashboard session.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::{Mode, jobs, parse_answer};
use crate::Commands;
use crate::app::App;

const COMMANDS: &[&str] = &[
    "add", "archive", "archived", "clock", "delete", "edit", "export", "favorite", "help", "list",
    "login", "logout", "quit", "reset", "settings", "summary", "unarchive", "whoami",
];

/// A shell line is a subcommand without the binary name.
#[derive(Parser)]
#[command(name = "jobtracker", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

/// rustyline helper: completes, hints, and highlights command names.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let first = line.split_whitespace().next().unwrap_or_default();
        if self.commands.iter().any(|cmd| cmd == first) {
            Owned(line.replacen(first, &first.bright_cyan().to_string(), 1))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

/// Splits a line into words, honouring single and double quotes.
pub fn split_args(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("Unclosed {} quote", q);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Resolves a staged delete or reset with a yes/no answer.
///
/// Returns `false` when nothing was staged.
fn answer_pending(app: &mut App, line: &str) -> Result<bool> {
    let delete_pending = app.dashboard.delete_confirmation().is_open();
    let reset_pending = app.dashboard.reset_confirmation().is_open();
    if !delete_pending && !reset_pending {
        return Ok(false);
    }

    match parse_answer(line) {
        Some(true) if delete_pending => jobs::finish_delete(app)?,
        Some(true) => jobs::finish_reset(app),
        Some(false) => {
            app.dashboard.cancel_delete();
            app.dashboard.cancel_reset();
            println!("{}", "Cancelled.".bright_black());
        }
        None => println!("{}", "Please answer yes or no.".bright_yellow()),
    }
    Ok(true)
}

async fn execute(app: &mut App, line: &str) -> Result<()> {
    if answer_pending(app, line)? {
        return Ok(());
    }

    let words = split_args(line)?;
    match ShellLine::try_parse_from(words) {
        Ok(parsed) => super::run(app, parsed.command, Mode::Shell).await,
        Err(e) => {
            e.print()?;
            Ok(())
        }
    }
}

pub async fn run(app: &mut App) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Job Tracker Pro ===".bright_magenta().bold());
    match app.dashboard.user() {
        Some(user) => println!("{}", format!("Welcome back, {}.", user.name).bright_green()),
        None => println!(
            "{}",
            "Sign in with: login --name <NAME> --email <EMAIL>".bright_black()
        ),
    }
    println!(
        "{}",
        "Type 'help' for commands, 'list' to see applications, or 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        match rl.readline("jobs> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if let Err(e) = execute(app, trimmed).await {
                    eprintln!("{}", format!("Error: {e:#}").red());
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_args_plain_and_quoted() {
        assert_eq!(
            split_args(r#"add --company "Acme, Inc." --title 'Staff Engineer'"#).unwrap(),
            ["add", "--company", "Acme, Inc.", "--title", "Staff Engineer"]
        );
        assert_eq!(split_args("  list   ").unwrap(), ["list"]);
        assert_eq!(split_args(r#"edit abc --notes """#).unwrap(), ["edit", "abc", "--notes", ""]);
    }

    #[test]
    fn test_split_args_unclosed_quote() {
        assert!(split_args("add --company \"Acme").is_err());
    }

    #[test]
    fn test_shell_line_parses_subcommands() {
        let parsed = ShellLine::try_parse_from(split_args("delete abc --yes").unwrap()).unwrap();
        assert!(matches!(parsed.command, Commands::Delete { ref id, yes: true } if id == "abc"));
    }

    #[test]
    fn test_hint_completes_command_name() {
        let helper = CliHelper::new();
        let history = rustyline::history::DefaultHistory::new();
        let ctx = Context::new(&history);
        assert_eq!(helper.hint("unarc", 5, &ctx), Some("hive".to_string()));
        assert_eq!(helper.hint("list ", 5, &ctx), None);
    }

    #[tokio::test]
    async fn test_staged_delete_is_answered_by_next_line() {
        let mut app = App::signed_in();
        execute(&mut app, "add --company Acme --title Dev --date 2024-01-01")
            .await
            .unwrap();
        let id = app.dashboard.all_jobs()[0].id.clone();

        execute(&mut app, &format!("delete {id}")).await.unwrap();
        assert!(app.dashboard.delete_confirmation().is_open());

        execute(&mut app, "maybe").await.unwrap();
        assert!(app.dashboard.delete_confirmation().is_open());

        execute(&mut app, "no").await.unwrap();
        assert!(app.dashboard.job(&id).is_some());

        execute(&mut app, &format!("delete {}", &id[..8])).await.unwrap();
        execute(&mut app, "yes").await.unwrap();
        assert!(app.dashboard.all_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_staged_reset_is_answered_by_next_line() {
        let mut app = App::signed_in();
        execute(&mut app, "add --company Acme --title Dev").await.unwrap();

        execute(&mut app, "reset").await.unwrap();
        assert!(app.dashboard.reset_confirmation().is_open());
        execute(&mut app, "y").await.unwrap();
        assert!(app.dashboard.all_jobs().is_empty());
    }
}
