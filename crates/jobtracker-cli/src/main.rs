use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jobtracker_core::preferences::{Language, Theme, WallpaperChoice};

mod app;
mod commands;
mod render;

use commands::jobs::JobFields;

#[derive(Parser)]
#[command(name = "jobtracker")]
#[command(about = "Job Tracker Pro - keep track of your job applications", long_about = None)]
struct Cli {
    /// Directory holding the stored documents (overrides config.toml)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Path to config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with your name and email
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Add a job application
    Add(JobFields),
    /// Edit a job application
    Edit {
        /// Id or unique id prefix
        id: String,
        #[command(flatten)]
        fields: JobFields,
    },
    /// List active applications (favorites first, newest first)
    List {
        /// Case-insensitive match on company or job title
        #[arg(long, short)]
        search: Option<String>,
    },
    /// List archived applications
    Archived,
    /// Show per-status counts
    Summary,
    /// Toggle the favorite flag
    Favorite { id: String },
    /// Move an application to the archive
    Archive { id: String },
    /// Restore an application from the archive
    Unarchive { id: String },
    /// Delete an application
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete every application
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Write all applications to a CSV file
    Export {
        /// Output path (defaults to job_tracker_pro_data.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show or change preferences
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Live clock with rotating quotes
    Clock {
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Interactive shell
    Shell,
}

impl Commands {
    /// Everything except signing in and preferences needs a user.
    pub fn requires_login(&self) -> bool {
        !matches!(
            self,
            Commands::Login { .. } | Commands::Whoami | Commands::Settings { .. } | Commands::Shell
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show current preferences
    Show,
    /// light, dark, or system
    Theme { theme: Theme },
    /// en or id
    Language { language: Language },
    /// auto, beach, nature, sky, or custom
    Wallpaper {
        choice: WallpaperChoice,
        /// Image file to use as the custom wallpaper
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut app, _log_guard) = app::App::bootstrap(cli.config.as_deref(), cli.data_dir)?;

    match cli.command {
        Commands::Shell => commands::shell::run(&mut app).await,
        command => commands::run(&mut app, command, commands::Mode::OneShot).await,
    }
}
