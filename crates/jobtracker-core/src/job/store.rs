//! The job record store.

use std::collections::HashSet;

use uuid::Uuid;

use super::model::{JobApplication, JobDraft};
use crate::error::{JobTrackerError, Result};
use crate::storage::{PersistentStore, keys};

const ENTITY: &str = "job";

/// Owns the ordered job collection and writes it back after every mutation.
///
/// Insertion order is kept for storage and export; display order is a
/// derived view (see [`super::view`]). Operations that name an unknown id
/// return [`JobTrackerError::NotFound`] and leave the collection untouched.
#[derive(Debug)]
pub struct JobStore {
    jobs: Vec<JobApplication>,
    store: PersistentStore,
}

impl JobStore {
    /// Loads the collection from the `jobs` key, or starts empty.
    ///
    /// Each record decodes on its own: one that no longer parses is skipped
    /// without costing its neighbours. Records repeating an earlier id are
    /// dropped so the one-record-per-id invariant holds even for hand-edited
    /// documents.
    pub fn load(store: PersistentStore) -> Self {
        let raw: Vec<serde_json::Value> = store.get(keys::JOBS, Vec::new());
        let total = raw.len();
        let decoded: Vec<JobApplication> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(job) => Some(job),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipped malformed job record");
                    None
                }
            })
            .collect();
        let valid = decoded.len();

        let mut seen = HashSet::new();
        let jobs: Vec<JobApplication> = decoded
            .into_iter()
            .filter(|job| seen.insert(job.id.clone()))
            .collect();

        if jobs.len() != valid {
            tracing::warn!(
                dropped = valid - jobs.len(),
                "Dropped job records with duplicate ids"
            );
        }
        tracing::debug!(count = jobs.len(), skipped = total - valid, "Loaded job records");

        Self { jobs, store }
    }

    pub fn all(&self) -> &[JobApplication] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&JobApplication> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Validates `draft`, assigns a fresh id, and appends the record.
    pub fn create(&mut self, draft: JobDraft) -> Result<&JobApplication> {
        let job = JobApplication::from_draft(Uuid::new_v4().to_string(), draft)?;
        tracing::info!(job_id = %job.id, company = %job.company, "Created job application");
        self.jobs.push(job);
        self.persist();
        let index = self.jobs.len() - 1;
        Ok(&self.jobs[index])
    }

    /// Replaces the editable fields of the record with `id`.
    pub fn update(&mut self, id: &str, draft: JobDraft) -> Result<&JobApplication> {
        let index = self.position(id)?;
        self.jobs[index].apply_draft(draft)?;
        tracing::info!(job_id = %id, "Updated job application");
        self.persist();
        Ok(&self.jobs[index])
    }

    /// Removes and returns the record with `id`.
    pub fn delete(&mut self, id: &str) -> Result<JobApplication> {
        let index = self.position(id)?;
        let removed = self.jobs.remove(index);
        tracing::info!(job_id = %id, "Deleted job application");
        self.persist();
        Ok(removed)
    }

    pub fn set_archived(&mut self, id: &str, archived: bool) -> Result<()> {
        let index = self.position(id)?;
        self.jobs[index].is_archived = archived;
        tracing::debug!(job_id = %id, archived, "Set archived flag");
        self.persist();
        Ok(())
    }

    pub fn set_favorite(&mut self, id: &str, favorite: bool) -> Result<()> {
        let index = self.position(id)?;
        self.jobs[index].is_favorite = favorite;
        tracing::debug!(job_id = %id, favorite, "Set favorite flag");
        self.persist();
        Ok(())
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let index = self.position(id)?;
        let favorite = !self.jobs[index].is_favorite;
        self.set_favorite(id, favorite)?;
        Ok(favorite)
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        let removed = self.jobs.len();
        self.jobs.clear();
        tracing::info!(removed, "Cleared all job applications");
        self.persist();
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| JobTrackerError::not_found(ENTITY, id))
    }

    fn persist(&self) {
        self.store.set(keys::JOBS, &self.jobs);
    }
}
