//! Response: a respondent's pick of one answer choice.
//!
//! A response reaches its question through the answer choice and its poll
//! through the question. The rules that guard a new response need that
//! resolved context plus the responses already recorded for the same
//! question, so they live in [`NewResponse::check`] and take everything as
//! arguments.

use serde::{Deserialize, Serialize};

use crate::error::{ResponseViolation, ResponseViolations};
use crate::id::{AnswerChoiceId, ResponseId, UserId};
use crate::poll::Poll;
use crate::question::Question;
use crate::time::Timestamp;

/// A persisted response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub id: ResponseId,
    pub answer_choice_id: AnswerChoiceId,
    pub respondent_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResponse {
    pub answer_choice_id: AnswerChoiceId,
    pub respondent_id: UserId,
}

impl NewResponse {
    #[must_use]
    pub fn new(answer_choice_id: AnswerChoiceId, respondent_id: UserId) -> Self {
        Self {
            answer_choice_id,
            respondent_id,
        }
    }

    /// Run every response rule and report all that fail.
    ///
    /// `question` and `poll` are the ones reached through the chosen answer
    /// choice. `siblings` are the responses already stored for any answer
    /// choice of `question`.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseViolations`] listing a
    /// [`ResponseViolation::DuplicateResponse`] when a sibling comes from the
    /// same respondent, and a [`ResponseViolation::SelfAnswer`] when the
    /// respondent authored `poll`. Both are reported when both hold.
    pub fn check(
        &self,
        question: &Question,
        poll: &Poll,
        siblings: &[Response],
    ) -> Result<(), ResponseViolations> {
        let mut violations = Vec::new();

        if siblings
            .iter()
            .any(|sibling| sibling.respondent_id == self.respondent_id)
        {
            violations.push(ResponseViolation::DuplicateResponse {
                question_id: question.id,
                respondent_id: self.respondent_id,
            });
        }

        if poll.is_authored_by(self.respondent_id) {
            violations.push(ResponseViolation::SelfAnswer {
                poll_id: poll.id,
                respondent_id: self.respondent_id,
            });
        }

        ResponseViolations::check(violations)
    }
}
