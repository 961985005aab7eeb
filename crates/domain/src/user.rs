//! User: a poll author and/or respondent identified by a unique name.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::UserId;
use crate::time::Timestamp;

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub user_name: String,
}

impl NewUser {
    #[must_use]
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }

    /// Check the presence rule. Uniqueness needs storage and is checked by
    /// the application service.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankUserName`] when `user_name` is empty or
    /// whitespace only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_name.trim().is_empty() {
            return Err(ValidationError::BlankUserName);
        }
        Ok(())
    }
}
