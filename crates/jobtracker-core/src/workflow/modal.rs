//! Modal state machines.
//!
//! Every modal is independent and only closes through an explicit action.

use crate::job::{JobApplication, JobDraft};

/// A plain two-state modal (settings, archive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Open,
}

impl Modal {
    pub fn open(&mut self) {
        *self = Modal::Open;
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open)
    }
}

/// The add/edit form.
///
/// An open form without a target is in create mode; with a target it edits
/// that record and is seeded with its values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormModal {
    #[default]
    Closed,
    Open {
        target: Option<JobApplication>,
    },
}

impl FormModal {
    pub fn open_create(&mut self) {
        *self = FormModal::Open { target: None };
    }

    pub fn open_edit(&mut self, job: JobApplication) {
        *self = FormModal::Open { target: Some(job) };
    }

    pub fn close(&mut self) {
        *self = FormModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, FormModal::Open { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormModal::Open { target: Some(_) })
    }

    /// The record being edited, if the form is in edit mode.
    pub fn target(&self) -> Option<&JobApplication> {
        match self {
            FormModal::Open { target } => target.as_ref(),
            FormModal::Closed => None,
        }
    }

    /// Initial field values for the open form, or `None` when closed.
    pub fn draft(&self) -> Option<JobDraft> {
        match self {
            FormModal::Closed => None,
            FormModal::Open { target: None } => Some(JobDraft::default()),
            FormModal::Open { target: Some(job) } => Some(JobDraft::from(job)),
        }
    }
}

/// Staged confirmation for a destructive action.
///
/// `stage` opens the confirmation and remembers what it applies to. Nothing
/// is mutated until `confirm` hands the staged target back to the caller;
/// `cancel` discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationGate<T> {
    Idle,
    Staged(T),
}

impl<T> Default for ConfirmationGate<T> {
    fn default() -> Self {
        ConfirmationGate::Idle
    }
}

impl<T> ConfirmationGate<T> {
    pub fn stage(&mut self, target: T) {
        *self = ConfirmationGate::Staged(target);
    }

    /// Takes the staged target and returns to idle.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(self, ConfirmationGate::Idle) {
            ConfirmationGate::Staged(target) => Some(target),
            ConfirmationGate::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = ConfirmationGate::Idle;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmationGate::Staged(_))
    }

    pub fn staged(&self) -> Option<&T> {
        match self {
            ConfirmationGate::Staged(target) => Some(target),
            ConfirmationGate::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{JobDraft, Status};

    #[test]
    fn test_modal_transitions() {
        let mut modal = Modal::default();
        assert!(!modal.is_open());
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_form_modes() {
        let mut form = FormModal::default();
        assert!(form.draft().is_none());

        form.open_create();
        assert!(form.is_open());
        assert!(!form.is_editing());
        assert_eq!(form.draft().unwrap().status, Status::Applied);

        let job = JobApplication::from_draft(
            "id-1",
            JobDraft::required("Acme", "Dev", "2024-01-01".parse().unwrap()),
        )
        .unwrap();
        form.open_edit(job.clone());
        assert!(form.is_editing());
        assert_eq!(form.target(), Some(&job));
        assert_eq!(form.draft().unwrap().company, "Acme");

        form.close();
        assert!(form.target().is_none());
    }

    #[test]
    fn test_gate_confirm_returns_target_once() {
        let mut gate = ConfirmationGate::default();
        gate.stage("job-1".to_string());
        assert!(gate.is_open());
        assert_eq!(gate.staged().map(String::as_str), Some("job-1"));

        assert_eq!(gate.confirm(), Some("job-1".to_string()));
        assert!(!gate.is_open());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_gate_cancel_discards_target() {
        let mut gate = ConfirmationGate::default();
        gate.stage(());
        gate.cancel();
        assert_eq!(gate.confirm(), None);
    }
}
