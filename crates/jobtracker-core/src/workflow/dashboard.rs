//! The dashboard: the application object every surface drives.

use std::sync::Arc;

use super::modal::{ConfirmationGate, FormModal, Modal};
use crate::error::{JobTrackerError, Result};
use crate::export;
use crate::job::{JobApplication, JobDraft, JobStore, StatusSummary, view};
use crate::preferences::{
    ActiveWallpaper, Appearance, AppearanceProbe, Language, Preferences, Theme, WallpaperChoice,
};
use crate::storage::PersistentStore;
use crate::user::{Session, User};

/// Session-scoped application state.
///
/// Owns the record store, the login session, and the preferences, all loaded
/// from the injected [`PersistentStore`] at construction and written back on
/// every change. Also holds the presentation state that is never persisted:
/// the search query and one state machine per modal.
pub struct Dashboard {
    jobs: JobStore,
    session: Session,
    preferences: Preferences,
    appearance_probe: Arc<dyn AppearanceProbe>,

    form: FormModal,
    delete_confirmation: ConfirmationGate<String>,
    reset_confirmation: ConfirmationGate<()>,
    settings: Modal,
    archive: Modal,
    search: String,
}

impl Dashboard {
    /// Loads jobs, user, and preferences from `store`.
    pub fn new(store: PersistentStore, appearance_probe: Arc<dyn AppearanceProbe>) -> Self {
        Self {
            jobs: JobStore::load(store.clone()),
            session: Session::load(store.clone()),
            preferences: Preferences::load(store),
            appearance_probe,
            form: FormModal::default(),
            delete_confirmation: ConfirmationGate::default(),
            reset_confirmation: ConfirmationGate::default(),
            settings: Modal::default(),
            archive: Modal::default(),
            search: String::new(),
        }
    }

    // ============================================================================
    // Session
    // ============================================================================

    pub fn user(&self) -> Option<&User> {
        self.session.current()
    }

    pub fn login(&mut self, name: &str, email: &str) -> Result<&User> {
        self.session.login(name, email)
    }

    /// Logs out and closes the settings panel it was triggered from.
    pub fn logout(&mut self) {
        self.session.logout();
        self.settings.close();
    }

    // ============================================================================
    // Records and views
    // ============================================================================

    pub fn job(&self, id: &str) -> Option<&JobApplication> {
        self.jobs.get(id)
    }

    /// Every record in storage order.
    pub fn all_jobs(&self) -> &[JobApplication] {
        self.jobs.all()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active records matching the search query, favorites first, newest first.
    pub fn visible_jobs(&self) -> Vec<&JobApplication> {
        view::active_view(self.jobs.all(), &self.search)
    }

    pub fn archived_jobs(&self) -> Vec<&JobApplication> {
        view::archived_view(self.jobs.all())
    }

    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_jobs(self.jobs.all())
    }

    pub fn archive(&mut self, id: &str) -> Result<()> {
        self.jobs.set_archived(id, true)
    }

    pub fn unarchive(&mut self, id: &str) -> Result<()> {
        self.jobs.set_archived(id, false)
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.jobs.toggle_favorite(id)
    }

    pub fn export_csv(&self) -> String {
        export::to_csv(self.jobs.all())
    }

    // ============================================================================
    // Add/edit form
    // ============================================================================

    pub fn form(&self) -> &FormModal {
        &self.form
    }

    pub fn open_add_form(&mut self) {
        self.form.open_create();
    }

    pub fn open_edit_form(&mut self, id: &str) -> Result<()> {
        let job = self
            .jobs
            .get(id)
            .cloned()
            .ok_or_else(|| JobTrackerError::not_found("job", id))?;
        self.form.open_edit(job);
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    /// Submits the open form.
    ///
    /// Creates a record in create mode and updates the target in edit mode.
    /// The form closes on success and stays open on error, so a validation
    /// failure leaves the user's input in place.
    pub fn submit_form(&mut self, draft: JobDraft) -> Result<JobApplication> {
        let saved = match &self.form {
            FormModal::Closed => {
                return Err(JobTrackerError::internal("no form is open"));
            }
            FormModal::Open { target: None } => self.jobs.create(draft)?.clone(),
            FormModal::Open { target: Some(job) } => {
                let id = job.id.clone();
                self.jobs.update(&id, draft)?.clone()
            }
        };
        self.form.close();
        Ok(saved)
    }

    // ============================================================================
    // Staged delete
    // ============================================================================

    pub fn delete_confirmation(&self) -> &ConfirmationGate<String> {
        &self.delete_confirmation
    }

    /// Opens the delete confirmation for `id`. Nothing is removed yet.
    pub fn request_delete(&mut self, id: &str) -> Result<()> {
        if self.jobs.get(id).is_none() {
            return Err(JobTrackerError::not_found("job", id));
        }
        self.delete_confirmation.stage(id.to_string());
        Ok(())
    }

    /// Deletes the staged record. Returns `None` when nothing was staged.
    pub fn confirm_delete(&mut self) -> Result<Option<JobApplication>> {
        match self.delete_confirmation.confirm() {
            Some(id) => self.jobs.delete(&id).map(Some),
            None => Ok(None),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmation.cancel();
    }

    // ============================================================================
    // Staged reset
    // ============================================================================

    pub fn reset_confirmation(&self) -> &ConfirmationGate<()> {
        &self.reset_confirmation
    }

    pub fn request_reset(&mut self) {
        self.reset_confirmation.stage(());
    }

    /// Removes every record if a reset was staged, closing the reset
    /// confirmation and the settings panel. Returns whether data was reset.
    pub fn confirm_reset(&mut self) -> bool {
        if self.reset_confirmation.confirm().is_none() {
            return false;
        }
        self.jobs.clear();
        self.settings.close();
        true
    }

    pub fn cancel_reset(&mut self) {
        self.reset_confirmation.cancel();
    }

    // ============================================================================
    // Settings and archive panels
    // ============================================================================

    pub fn settings_modal(&self) -> Modal {
        self.settings
    }

    pub fn open_settings(&mut self) {
        self.settings.open();
    }

    pub fn close_settings(&mut self) {
        self.settings.close();
    }

    pub fn archive_modal(&self) -> Modal {
        self.archive
    }

    pub fn open_archive(&mut self) {
        self.archive.open();
    }

    pub fn close_archive(&mut self) {
        self.archive.close();
    }

    // ============================================================================
    // Preferences
    // ============================================================================

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.set_theme(theme);
    }

    pub fn set_language(&mut self, language: Language) {
        self.preferences.set_language(language);
    }

    pub fn set_wallpaper(&mut self, wallpaper: WallpaperChoice) {
        self.preferences.set_wallpaper(wallpaper);
    }

    pub fn set_custom_wallpaper(&mut self, image: impl Into<String>) {
        self.preferences.set_custom_wallpaper(image);
    }

    /// Effective appearance, asking the platform again when the theme is `system`.
    pub fn appearance(&self) -> Appearance {
        self.preferences.appearance(self.appearance_probe.as_ref())
    }

    pub fn active_wallpaper_at(&self, hour: u32) -> ActiveWallpaper {
        self.preferences.active_wallpaper_at(hour)
    }
}
