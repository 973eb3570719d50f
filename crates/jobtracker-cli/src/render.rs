//! Terminal rendering for jobs, summaries, and quotes.

use colored::{ColoredString, Colorize};
use jobtracker_core::job::{JobApplication, Status, StatusSummary};
use jobtracker_core::ticker::Quote;

/// Characters of the id shown in listings; commands accept any unique prefix.
pub const SHORT_ID_LEN: usize = 8;

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn status(status: Status) -> ColoredString {
    let label = format!("{:<12}", status.to_string());
    match status {
        Status::Applied => label.bright_blue(),
        Status::Interviewing => label.yellow(),
        Status::Offered => label.green(),
        Status::Rejected => label.red(),
    }
}

/// One job as a short block: headline, optional detail line, optional notes.
pub fn job(job: &JobApplication) -> String {
    let star = if job.is_favorite {
        "★".yellow()
    } else {
        " ".normal()
    };
    let mut out = format!(
        "{} {}  {}  {} · {}  {}",
        star,
        short_id(&job.id).bright_black(),
        status(job.status),
        job.company.bold(),
        job.job_title,
        job.apply_date.to_string().bright_black(),
    );

    let mut details = Vec::new();
    if let Some(location) = &job.location {
        details.push(location.clone());
    }
    if let Some(work_location) = job.work_location {
        details.push(work_location.to_string());
    }
    if let Some(employment_type) = job.employment_type {
        details.push(employment_type.to_string());
    }
    if let Some(date) = job.interview_date {
        details.push(format!("interview {date}"));
    }
    if let Some(url) = &job.url {
        details.push(url.clone());
    }
    if !details.is_empty() {
        out.push_str(&format!("\n    {}", details.join(" | ").bright_black()));
    }
    if let Some(notes) = &job.notes {
        for line in notes.lines() {
            out.push_str(&format!("\n    {}", line.italic()));
        }
    }
    out
}

pub fn summary(summary: &StatusSummary) -> String {
    format!(
        "{} {}  {} {}  {} {}  {} {}  {} {}  {} {}",
        "Applied".bright_blue(),
        summary.applied,
        "Interviewing".yellow(),
        summary.interviewing,
        "Offered".green(),
        summary.offered,
        "Rejected".red(),
        summary.rejected,
        "★".yellow(),
        summary.favorites,
        "Archived".bright_black(),
        summary.archived,
    )
}

pub fn quote(quote: &Quote) -> String {
    format!(
        "{}\n  {}",
        format!("\"{}\"", quote.text).italic(),
        format!("- {}", quote.source).cyan()
    )
}
