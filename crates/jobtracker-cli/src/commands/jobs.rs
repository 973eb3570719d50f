//! Job commands: add/edit form, listings, flags, delete/reset, export.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use jobtracker_core::export::EXPORT_FILE_NAME;
use jobtracker_core::job::{EmploymentType, JobDraft, Status, WorkLocation};
use jobtracker_core::{Dashboard, JobTrackerError};

use super::{Mode, confirm};
use crate::app::App;
use crate::render;

/// Form fields. Unset flags keep the form's current value.
#[derive(Args, Debug, Default, Clone)]
pub struct JobFields {
    #[arg(long)]
    pub company: Option<String>,
    /// Job title
    #[arg(long)]
    pub title: Option<String>,
    /// Application date (defaults to today when adding)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
    /// Applied, Interviewing, Offered, or Rejected
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// On-site, Hybrid, or Remote
    #[arg(long)]
    pub work_location: Option<WorkLocation>,
    /// Full-time, Part-time, Contract, or Internship
    #[arg(long)]
    pub employment_type: Option<EmploymentType>,
    /// Interview date; an empty value clears it
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub interview_date: Option<ClearableDate>,
    #[arg(long)]
    pub notes: Option<String>,
}

/// A date flag that accepts an empty value to mean "no date".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearableDate(pub Option<NaiveDate>);

impl FromStr for ClearableDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Self(None)),
            date => date.parse().map(|date| Self(Some(date))),
        }
    }
}

impl JobFields {
    /// Overlays the given flags onto `draft`. An empty text value clears the
    /// optional field.
    pub fn apply_to(self, draft: &mut JobDraft) {
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(title) = self.title {
            draft.job_title = title;
        }
        if let Some(date) = self.date {
            draft.apply_date = Some(date);
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if self.url.is_some() {
            draft.url = self.url;
        }
        if self.location.is_some() {
            draft.location = self.location;
        }
        if self.work_location.is_some() {
            draft.work_location = self.work_location;
        }
        if self.employment_type.is_some() {
            draft.employment_type = self.employment_type;
        }
        if let Some(ClearableDate(date)) = self.interview_date {
            draft.interview_date = date;
        }
        if self.notes.is_some() {
            draft.notes = self.notes;
        }
    }
}

/// Resolves a full id or a unique id prefix.
pub fn resolve_id(dashboard: &Dashboard, needle: &str) -> Result<String> {
    if dashboard.job(needle).is_some() {
        return Ok(needle.to_string());
    }
    if needle.is_empty() {
        return Err(JobTrackerError::not_found("job", needle).into());
    }

    let matches: Vec<&str> = dashboard
        .all_jobs()
        .iter()
        .map(|job| job.id.as_str())
        .filter(|id| id.starts_with(needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => Err(JobTrackerError::not_found("job", needle).into()),
        _ => bail!(
            "Id prefix '{}' matches {} jobs; type more characters",
            needle,
            matches.len()
        ),
    }
}

/// Submits the open form, closing it when the submission is rejected.
fn submit(app: &mut App, fields: JobFields) -> Result<()> {
    let mut draft = app
        .dashboard
        .form()
        .draft()
        .context("The job form is not open")?;
    fields.apply_to(&mut draft);

    match app.dashboard.submit_form(draft) {
        Ok(job) => {
            println!("{}", render::job(&job));
            Ok(())
        }
        Err(e) => {
            app.dashboard.close_form();
            Err(e.into())
        }
    }
}

pub fn add(app: &mut App, fields: JobFields) -> Result<()> {
    app.dashboard.open_add_form();
    submit(app, fields)
}

pub fn edit(app: &mut App, id: &str, fields: JobFields) -> Result<()> {
    let id = resolve_id(&app.dashboard, id)?;
    app.dashboard.open_edit_form(&id)?;
    submit(app, fields)
}

pub fn list(app: &mut App, search: Option<String>) -> Result<()> {
    app.dashboard.set_search(search.unwrap_or_default());

    println!("{}", render::summary(&app.dashboard.summary()));
    let jobs = app.dashboard.visible_jobs();
    if jobs.is_empty() {
        let message = if app.dashboard.search().is_empty() {
            "No applications yet. Add one with `jobtracker add`.".to_string()
        } else {
            format!("No applications match '{}'.", app.dashboard.search())
        };
        println!("{}", message.bright_black());
    }
    for job in jobs {
        println!("{}", render::job(job));
    }
    Ok(())
}

pub fn archived(app: &mut App) -> Result<()> {
    app.dashboard.open_archive();
    let jobs = app.dashboard.archived_jobs();
    if jobs.is_empty() {
        println!("{}", "The archive is empty.".bright_black());
    }
    for job in jobs {
        println!("{}", render::job(job));
    }
    app.dashboard.close_archive();
    Ok(())
}

pub fn summary(app: &App) -> Result<()> {
    println!("{}", render::summary(&app.dashboard.summary()));
    Ok(())
}

pub fn favorite(app: &mut App, id: &str) -> Result<()> {
    let id = resolve_id(&app.dashboard, id)?;
    let favorite = app.dashboard.toggle_favorite(&id)?;
    let label = if favorite { "Marked as favorite" } else { "Removed from favorites" };
    println!("{} {}", label, render::short_id(&id).bright_black());
    Ok(())
}

pub fn archive(app: &mut App, id: &str) -> Result<()> {
    let id = resolve_id(&app.dashboard, id)?;
    app.dashboard.archive(&id)?;
    println!("Archived {}", render::short_id(&id).bright_black());
    Ok(())
}

pub fn unarchive(app: &mut App, id: &str) -> Result<()> {
    let id = resolve_id(&app.dashboard, id)?;
    app.dashboard.unarchive(&id)?;
    println!("Restored {}", render::short_id(&id).bright_black());
    Ok(())
}

pub fn delete(app: &mut App, id: &str, yes: bool, mode: Mode) -> Result<()> {
    let id = resolve_id(&app.dashboard, id)?;
    app.dashboard.request_delete(&id)?;
    if yes {
        return finish_delete(app);
    }

    let question = match app.dashboard.job(&id) {
        Some(job) => format!("Delete {} · {}?", job.company, job.job_title),
        None => format!("Delete {}?", id),
    };
    match mode {
        Mode::Shell => {
            println!("{} {}", question.bright_yellow(), "(yes/no)".bright_yellow());
            Ok(())
        }
        Mode::OneShot => {
            if confirm(&question)? {
                finish_delete(app)
            } else {
                app.dashboard.cancel_delete();
                println!("{}", "Cancelled.".bright_black());
                Ok(())
            }
        }
    }
}

/// Confirms a staged delete.
pub fn finish_delete(app: &mut App) -> Result<()> {
    if let Some(job) = app.dashboard.confirm_delete()? {
        println!("Deleted {} · {}", job.company, job.job_title);
    }
    Ok(())
}

pub fn reset(app: &mut App, yes: bool, mode: Mode) -> Result<()> {
    app.dashboard.request_reset();
    if yes {
        finish_reset(app);
        return Ok(());
    }

    let question = format!(
        "Delete all {} applications? This cannot be undone.",
        app.dashboard.all_jobs().len()
    );
    match mode {
        Mode::Shell => {
            println!("{} {}", question.bright_yellow(), "(yes/no)".bright_yellow());
        }
        Mode::OneShot => {
            if confirm(&question)? {
                finish_reset(app);
            } else {
                app.dashboard.cancel_reset();
                println!("{}", "Cancelled.".bright_black());
            }
        }
    }
    Ok(())
}

/// Confirms a staged reset.
pub fn finish_reset(app: &mut App) {
    if app.dashboard.confirm_reset() {
        println!("{}", "All applications removed.".bright_red());
    }
}

pub fn export(app: &App, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    std::fs::write(&path, app.dashboard.export_csv())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "Exported {} applications to {}",
        app.dashboard.all_jobs().len(),
        path.display()
    );
    Ok(())
}
