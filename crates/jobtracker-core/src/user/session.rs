//! Login session lifecycle.

use super::model::User;
use crate::error::Result;
use crate::storage::{PersistentStore, keys};

/// The persisted login session.
///
/// Loaded once at startup. `login` and `logout` write the `user` key
/// immediately; a logged-out session stores JSON `null`.
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<User>,
    store: PersistentStore,
}

impl Session {
    pub fn load(store: PersistentStore) -> Self {
        let user: Option<User> = store.get(keys::USER, None);
        Self { user, store }
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// One-time login step. Replaces any previous user.
    pub fn login(&mut self, name: &str, email: &str) -> Result<&User> {
        let user = User::new(name, email)?;
        tracing::info!(name = %user.name, "User logged in");
        self.store.set(keys::USER, &Some(&user));
        Ok(&*self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(name = %user.name, "User logged out");
        }
        self.store.set::<Option<User>>(keys::USER, &None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_has_no_user() {
        let session = Session::load(PersistentStore::in_memory());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_login_persists_across_reload() {
        let store = PersistentStore::in_memory();
        let mut session = Session::load(store.clone());
        session.login("Febri", "febri@example.com").unwrap();

        let reloaded = Session::load(store);
        assert_eq!(reloaded.current().unwrap().name, "Febri");
    }

    #[test]
    fn test_logout_clears_stored_user() {
        let store = PersistentStore::in_memory();
        let mut session = Session::load(store.clone());
        session.login("Febri", "febri@example.com").unwrap();
        session.logout();

        assert!(session.current().is_none());
        assert!(Session::load(store).current().is_none());
    }

    #[test]
    fn test_invalid_login_keeps_previous_state() {
        let mut session = Session::load(PersistentStore::in_memory());
        assert!(session.login("", "").unwrap_err().is_validation());
        assert!(!session.is_logged_in());
    }
}
