//! Question: a single prompt inside a poll.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{PollId, QuestionId};
use crate::time::Timestamp;

/// A persisted question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub poll_id: PollId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub poll_id: PollId,
    pub text: String,
}

impl NewQuestion {
    #[must_use]
    pub fn new(poll_id: PollId, text: impl Into<String>) -> Self {
        Self {
            poll_id,
            text: text.into(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankQuestionText`] when `text` is empty or
    /// whitespace only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::BlankQuestionText);
        }
        Ok(())
    }
}
