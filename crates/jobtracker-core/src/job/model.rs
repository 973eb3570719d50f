//! Job application domain model.
//!
//! The serialized form uses the camelCase field names and display-cased enum
//! values of the stored `jobs` document, so existing data keeps loading.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, de};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::error::{JobTrackerError, Result};

/// Progress of an application through the hiring pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Status {
    #[default]
    Applied,
    Interviewing,
    Offered,
    Rejected,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum WorkLocation {
    #[default]
    #[serde(rename = "On-site")]
    #[strum(to_string = "On-site", serialize = "onsite")]
    OnSite,
    Hybrid,
    Remote,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    #[strum(to_string = "Full-time", serialize = "fulltime")]
    FullTime,
    #[serde(rename = "Part-time")]
    #[strum(to_string = "Part-time", serialize = "parttime")]
    PartTime,
    Contract,
    Internship,
}

/// A single tracked job application.
///
/// `id` is assigned once by the record store and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub company: String,
    pub job_title: String,
    pub status: Status,
    pub apply_date: NaiveDate,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub work_location: Option<WorkLocation>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub employment_type: Option<EmploymentType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub notes: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub interview_date: Option<NaiveDate>,
}

/// Blank strings were stored for unset optional fields; read them as `None`.
fn empty_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

impl JobApplication {
    /// Builds a record from a validated draft.
    pub fn from_draft(id: impl Into<String>, draft: JobDraft) -> Result<Self> {
        let draft = draft.normalized();
        draft.validate()?;
        let apply_date = draft
            .apply_date
            .ok_or_else(|| JobTrackerError::validation(["applyDate"]))?;

        Ok(Self {
            id: id.into(),
            company: draft.company,
            job_title: draft.job_title,
            status: draft.status,
            apply_date,
            is_favorite: false,
            is_archived: false,
            url: draft.url,
            location: draft.location,
            work_location: draft.work_location,
            employment_type: draft.employment_type,
            notes: draft.notes,
            interview_date: draft.interview_date,
        })
    }

    /// Overwrites the editable fields, keeping `id` and the flags.
    pub fn apply_draft(&mut self, draft: JobDraft) -> Result<()> {
        let replacement = Self::from_draft(self.id.clone(), draft)?;
        *self = Self {
            is_favorite: self.is_favorite,
            is_archived: self.is_archived,
            ..replacement
        };
        Ok(())
    }
}

/// Editable fields of a job application, as submitted by the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub company: String,
    pub job_title: String,
    pub status: Status,
    pub apply_date: Option<NaiveDate>,
    pub url: Option<String>,
    pub location: Option<String>,
    pub work_location: Option<WorkLocation>,
    pub employment_type: Option<EmploymentType>,
    pub notes: Option<String>,
    pub interview_date: Option<NaiveDate>,
}

impl JobDraft {
    /// Creates an empty draft dated `today`, with the form's default selections.
    pub fn new_on(today: NaiveDate) -> Self {
        Self {
            company: String::new(),
            job_title: String::new(),
            status: Status::Applied,
            apply_date: Some(today),
            url: None,
            location: None,
            work_location: Some(WorkLocation::OnSite),
            employment_type: Some(EmploymentType::FullTime),
            notes: None,
            interview_date: None,
        }
    }

    /// Convenience constructor for the three required fields.
    pub fn required(
        company: impl Into<String>,
        job_title: impl Into<String>,
        apply_date: NaiveDate,
    ) -> Self {
        Self {
            company: company.into(),
            job_title: job_title.into(),
            ..Self::new_on(apply_date)
        }
    }

    /// Trims text fields and turns blank optional values into `None`.
    pub fn normalized(self) -> Self {
        fn blank_to_none(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            company: self.company.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            url: blank_to_none(self.url),
            location: blank_to_none(self.location),
            notes: blank_to_none(self.notes),
            ..self
        }
    }

    /// Checks that `company`, `jobTitle`, and `applyDate` are present.
    ///
    /// The error lists every missing field, not just the first.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.company.trim().is_empty() {
            missing.push("company");
        }
        if self.job_title.trim().is_empty() {
            missing.push("jobTitle");
        }
        if self.apply_date.is_none() {
            missing.push("applyDate");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(JobTrackerError::validation(missing))
        }
    }
}

impl Default for JobDraft {
    fn default() -> Self {
        Self::new_on(Local::now().date_naive())
    }
}

impl From<&JobApplication> for JobDraft {
    fn from(job: &JobApplication) -> Self {
        Self {
            company: job.company.clone(),
            job_title: job.job_title.clone(),
            status: job.status,
            apply_date: Some(job.apply_date),
            url: job.url.clone(),
            location: job.location.clone(),
            work_location: job.work_location,
            employment_type: job.employment_type,
            notes: job.notes.clone(),
            interview_date: job.interview_date,
        }
    }
}
