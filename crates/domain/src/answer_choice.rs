//! Answer choice: one selectable option of a question.

use serde::{Deserialize, Serialize};

use crate::id::{AnswerChoiceId, QuestionId};
use crate::time::Timestamp;

/// A persisted answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub id: AnswerChoiceId,
    pub question_id: QuestionId,
    pub choice: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating an [`AnswerChoice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnswerChoice {
    pub question_id: QuestionId,
    pub choice: String,
}

impl NewAnswerChoice {
    #[must_use]
    pub fn new(question_id: QuestionId, choice: impl Into<String>) -> Self {
        Self {
            question_id,
            choice: choice.into(),
        }
    }
}
