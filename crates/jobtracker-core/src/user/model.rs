//! User domain model.

use serde::{Deserialize, Serialize};

use crate::error::{JobTrackerError, Result};

/// The person tracking applications on this machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name used in the dashboard greeting
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a user after checking both fields are filled in.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();

        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push("name");
        }
        if email.is_empty() || !email.contains('@') {
            missing.push("email");
        }
        if !missing.is_empty() {
            return Err(JobTrackerError::validation(missing));
        }

        Ok(Self { name, email })
    }
}
