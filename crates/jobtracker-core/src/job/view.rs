//! Derived views over the job collection.
//!
//! Everything here is a pure function of the records passed in. Views are
//! recomputed on every render and never cached.

use std::cmp::Ordering;

use serde::Serialize;

use super::model::{JobApplication, Status};

/// Splits records into `(active, archived)`, preserving storage order.
pub fn partition(jobs: &[JobApplication]) -> (Vec<&JobApplication>, Vec<&JobApplication>) {
    jobs.iter().partition(|job| !job.is_archived)
}

/// Case-insensitive substring match on company or job title.
///
/// An empty query matches every record.
pub fn matches_query(job: &JobApplication, query: &str) -> bool {
    let needle = query.to_lowercase();
    job.company.to_lowercase().contains(&needle) || job.job_title.to_lowercase().contains(&needle)
}

/// Active records matching `query`. Archived records never match.
pub fn search_active<'a>(jobs: &'a [JobApplication], query: &str) -> Vec<&'a JobApplication> {
    jobs.iter()
        .filter(|job| !job.is_archived && matches_query(job, query))
        .collect()
}

/// Display ordering: favorites first, then newest `applyDate` first.
pub fn display_order(a: &JobApplication, b: &JobApplication) -> Ordering {
    b.is_favorite
        .cmp(&a.is_favorite)
        .then_with(|| b.apply_date.cmp(&a.apply_date))
}

/// Sorts for display. The sort is stable, so ties keep their input order.
pub fn sort_for_display(jobs: &mut [&JobApplication]) {
    jobs.sort_by(|a, b| display_order(a, b));
}

/// The dashboard list: active records matching `query`, in display order.
pub fn active_view<'a>(jobs: &'a [JobApplication], query: &str) -> Vec<&'a JobApplication> {
    let mut visible = search_active(jobs, query);
    sort_for_display(&mut visible);
    visible
}

/// The archive list, in storage order.
pub fn archived_view(jobs: &[JobApplication]) -> Vec<&JobApplication> {
    jobs.iter().filter(|job| job.is_archived).collect()
}

/// Counts shown above the dashboard list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub applied: usize,
    pub interviewing: usize,
    pub offered: usize,
    pub rejected: usize,
    /// Favorites among active records.
    pub favorites: usize,
    pub archived: usize,
}

impl StatusSummary {
    pub fn from_jobs(jobs: &[JobApplication]) -> Self {
        jobs.iter().fold(Self::default(), |mut summary, job| {
            if job.is_archived {
                summary.archived += 1;
                return summary;
            }
            if job.is_favorite {
                summary.favorites += 1;
            }
            match job.status {
                Status::Applied => summary.applied += 1,
                Status::Interviewing => summary.interviewing += 1,
                Status::Offered => summary.offered += 1,
                Status::Rejected => summary.rejected += 1,
            }
            summary
        })
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Applied => self.applied,
            Status::Interviewing => self.interviewing,
            Status::Offered => self.offered,
            Status::Rejected => self.rejected,
        }
    }

    pub fn active(&self) -> usize {
        self.applied + self.interviewing + self.offered + self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::model::JobDraft;

    fn job(id: &str, company: &str, title: &str, date: &str, favorite: bool) -> JobApplication {
        let mut job = JobApplication::from_draft(
            id,
            JobDraft::required(company, title, date.parse().unwrap()),
        )
        .unwrap();
        job.is_favorite = favorite;
        job
    }

    fn ids(jobs: &[&JobApplication]) -> Vec<String> {
        jobs.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_favorites_first_then_newest() {
        let jobs = vec![
            job("a", "A", "Dev", "2024-01-01", false),
            job("b", "B", "Dev", "2024-03-01", false),
            job("c", "C", "Dev", "2023-12-01", true),
            job("d", "D", "Dev", "2024-02-01", true),
        ];
        let view = active_view(&jobs, "");
        assert_eq!(ids(&view), ["d", "c", "b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let jobs = vec![
            job("first", "A", "Dev", "2024-01-01", false),
            job("second", "B", "Dev", "2024-01-01", false),
            job("third", "C", "Dev", "2024-01-01", false),
        ];
        let view = active_view(&jobs, "");
        assert_eq!(ids(&view), ["first", "second", "third"]);
    }

    #[test]
    fn test_favorite_block_precedes_every_non_favorite() {
        let jobs: Vec<JobApplication> = (0..12)
            .map(|i| {
                let date = format!("2024-01-{:02}", (i * 7) % 28 + 1);
                job(&i.to_string(), "Co", "Dev", &date, i % 3 == 0)
            })
            .collect();
        let view = active_view(&jobs, "");

        let first_plain = view.iter().position(|j| !j.is_favorite).unwrap();
        assert!(view[first_plain..].iter().all(|j| !j.is_favorite));
        for pair in view[..first_plain].windows(2) {
            assert!(pair[0].apply_date >= pair[1].apply_date);
        }
        for pair in view[first_plain..].windows(2) {
            assert!(pair[0].apply_date >= pair[1].apply_date);
        }
    }

    #[test]
    fn test_search_matches_company_or_title_case_insensitively() {
        let jobs = vec![
            job("a", "Acme", "Backend Engineer", "2024-01-01", false),
            job("b", "Globex", "Designer", "2024-01-02", false),
            job("c", "Initech", "ACME liaison", "2024-01-03", false),
        ];
        assert_eq!(ids(&search_active(&jobs, "acme")), ["a", "c"]);
        assert_eq!(ids(&search_active(&jobs, "DESIGN")), ["b"]);
        assert!(search_active(&jobs, "umbrella").is_empty());
        assert_eq!(search_active(&jobs, "").len(), 3);
    }

    #[test]
    fn test_archived_records_never_searchable() {
        let mut archived = job("a", "Acme", "Dev", "2024-01-01", true);
        archived.is_archived = true;
        let jobs = vec![archived, job("b", "Acme", "Dev", "2024-01-01", false)];

        assert_eq!(ids(&active_view(&jobs, "acme")), ["b"]);
        assert_eq!(ids(&active_view(&jobs, "")), ["b"]);
        assert_eq!(ids(&archived_view(&jobs)), ["a"]);
    }

    #[test]
    fn test_partition_preserves_order() {
        let mut jobs = vec![
            job("a", "A", "Dev", "2024-01-01", false),
            job("b", "B", "Dev", "2024-01-01", false),
            job("c", "C", "Dev", "2024-01-01", false),
        ];
        jobs[1].is_archived = true;
        let (active, archived) = partition(&jobs);
        assert_eq!(ids(&active), ["a", "c"]);
        assert_eq!(ids(&archived), ["b"]);
    }

    #[test]
    fn test_summary_counts_active_only() {
        let mut jobs = vec![
            job("a", "A", "Dev", "2024-01-01", true),
            job("b", "B", "Dev", "2024-01-01", false),
            job("c", "C", "Dev", "2024-01-01", false),
        ];
        jobs[1].status = Status::Interviewing;
        jobs[2].is_archived = true;

        let summary = StatusSummary::from_jobs(&jobs);
        assert_eq!(summary.count(Status::Applied), 1);
        assert_eq!(summary.count(Status::Interviewing), 1);
        assert_eq!(summary.archived, 1);
        assert_eq!(summary.favorites, 1);
        assert_eq!(summary.active(), 2);
    }
}
