//! Error types shared across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MiniPollError`] via `#[from]`. Storage adapters box their own error
//! type into [`MiniPollError::Storage`].

use std::fmt;

use crate::id::{PollId, QuestionId, UserId};

/// Top-level error returned by every port and service.
#[derive(Debug, thiserror::Error)]
pub enum MiniPollError {
    /// A required field is blank or a uniqueness rule is broken.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A response was refused; carries every rule it broke.
    #[error("response rejected: {0}")]
    ResponseRejected(#[from] ResponseViolations),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures raised before persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("user name must not be blank")]
    BlankUserName,

    #[error("user name {0:?} is already taken")]
    UserNameTaken(String),

    #[error("question text must not be blank")]
    BlankQuestionText,
}

/// A single reason a response cannot be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResponseViolation {
    /// The respondent already answered this question.
    #[error("respondent {respondent_id} has already answered question {question_id}")]
    DuplicateResponse {
        question_id: QuestionId,
        respondent_id: UserId,
    },

    /// The respondent authored the poll the question belongs to.
    #[error("respondent {respondent_id} authored poll {poll_id} and cannot answer it")]
    SelfAnswer {
        poll_id: PollId,
        respondent_id: UserId,
    },
}

/// Every [`ResponseViolation`] found for one candidate response.
///
/// Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseViolations(Vec<ResponseViolation>);

impl ResponseViolations {
    /// Turn a list of violations into an error, or `Ok` when there are none.
    ///
    /// # Errors
    ///
    /// Returns `Err` holding the violations if `violations` is not empty.
    pub fn check(violations: Vec<ResponseViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self(violations))
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ResponseViolation] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, violation: &ResponseViolation) -> bool {
        self.0.contains(violation)
    }

    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        self.0
            .iter()
            .any(|v| matches!(v, ResponseViolation::DuplicateResponse { .. }))
    }

    #[must_use]
    pub fn is_self_answer(&self) -> bool {
        self.0
            .iter()
            .any(|v| matches!(v, ResponseViolation::SelfAnswer { .. }))
    }
}

impl fmt::Display for ResponseViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResponseViolations {}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl fmt::Display) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_empty_violation_list() {
        assert!(ResponseViolations::check(Vec::new()).is_ok());
    }

    #[test]
    fn should_join_every_violation_in_display() {
        let err = ResponseViolations::check(vec![
            ResponseViolation::DuplicateResponse {
                question_id: QuestionId::new(3),
                respondent_id: UserId::new(1),
            },
            ResponseViolation::SelfAnswer {
                poll_id: PollId::new(2),
                respondent_id: UserId::new(1),
            },
        ])
        .unwrap_err();

        assert!(err.is_duplicate());
        assert!(err.is_self_answer());
        assert_eq!(
            err.to_string(),
            "respondent 1 has already answered question 3; respondent 1 authored poll 2 and cannot answer it"
        );
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: MiniPollError = ValidationError::BlankUserName.into();
        assert!(matches!(
            err,
            MiniPollError::Validation(ValidationError::BlankUserName)
        ));
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError::new("Poll", PollId::new(9));
        assert_eq!(err.to_string(), "Poll 9 not found");
    }
}
