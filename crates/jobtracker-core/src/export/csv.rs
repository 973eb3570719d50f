//! CSV rendering.

use crate::job::JobApplication;

/// Column header row, in export order.
pub const CSV_HEADER: &str = "ID,Company,Job Title,Status,Apply Date,URL,Location,Work Location,Employment Type,Interview Date,Is Favorite,Is Archived,Notes";

/// Default file name for a full export.
pub const EXPORT_FILE_NAME: &str = "job_tracker_pro_data.csv";

/// Quotes `value` if it contains a comma, a double quote, or a newline.
///
/// Embedded double quotes are doubled inside the quoted form.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn optional<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| escape_field(&v.to_string()))
        .unwrap_or_default()
}

fn row(job: &JobApplication) -> String {
    [
        escape_field(&job.id),
        escape_field(&job.company),
        escape_field(&job.job_title),
        escape_field(job.status.as_ref()),
        job.apply_date.to_string(),
        optional(&job.url),
        optional(&job.location),
        optional(&job.work_location),
        optional(&job.employment_type),
        optional(&job.interview_date),
        job.is_favorite.to_string(),
        job.is_archived.to_string(),
        optional(&job.notes),
    ]
    .join(",")
}

/// Renders every record, in store order, as CSV.
///
/// Rows are separated by `\n` with no trailing newline. Archived records
/// are included; no filtering or sorting is applied.
pub fn to_csv(jobs: &[JobApplication]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(jobs.iter().map(row))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{EmploymentType, JobDraft, Status, WorkLocation};

    fn job(id: &str, draft: JobDraft) -> JobApplication {
        JobApplication::from_draft(id, draft).unwrap()
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_empty_collection_is_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_notes_with_comma_quote_and_newline() {
        let record = job(
            "1",
            JobDraft {
                notes: Some("hello, \"world\"\nend".to_string()),
                ..JobDraft::required("Acme", "Dev", "2024-01-01".parse().unwrap())
            },
        );

        let csv = to_csv(&[record]);
        assert!(csv.ends_with(",\"hello, \"\"world\"\"\nend\""));
    }

    #[test]
    fn test_full_row_layout() {
        let mut record = job(
            "abc",
            JobDraft {
                status: Status::Interviewing,
                url: Some("https://acme.test/jobs/1".to_string()),
                location: Some("Jakarta".to_string()),
                work_location: Some(WorkLocation::OnSite),
                employment_type: Some(EmploymentType::FullTime),
                interview_date: Some("2024-01-10".parse().unwrap()),
                ..JobDraft::required("Acme", "Dev", "2024-01-01".parse().unwrap())
            },
        );
        record.is_favorite = true;

        let csv = to_csv(&[record]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "abc,Acme,Dev,Interviewing,2024-01-01,https://acme.test/jobs/1,Jakarta,On-site,Full-time,2024-01-10,true,false,"
        );
    }

    #[test]
    fn test_rows_follow_store_order_and_include_archived() {
        let a = job("a", JobDraft::required("A", "Dev", "2024-03-01".parse().unwrap()));
        let mut b = job("b", JobDraft::required("B", "Dev", "2024-01-01".parse().unwrap()));
        b.is_archived = true;

        let csv = to_csv(&[a, b]);
        let ids: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(!csv.ends_with('\n'));
    }
}
