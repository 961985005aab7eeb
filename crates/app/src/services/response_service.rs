//! Response service: recording a respondent's answer.
//!
//! A response is only written once the respondent exists, the chosen answer
//! choice resolves to a question and poll, and every rule in
//! [`NewResponse::check`] passes. All rule violations are reported together.

use minipoll_domain::error::{MiniPollError, NotFoundError};
use minipoll_domain::id::UserId;
use minipoll_domain::response::{NewResponse, Response};

use crate::ports::{
    AnswerChoiceRepository, PollRepository, QuestionRepository, ResponseRepository,
    UserRepository,
};

/// Application service for responses.
pub struct ResponseService<R, A, Q, P, U> {
    responses: R,
    answer_choices: A,
    questions: Q,
    polls: P,
    users: U,
}

impl<R, A, Q, P, U> ResponseService<R, A, Q, P, U>
where
    R: ResponseRepository,
    A: AnswerChoiceRepository,
    Q: QuestionRepository,
    P: PollRepository,
    U: UserRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(responses: R, answer_choices: A, questions: Q, polls: P, users: U) -> Self {
        Self {
            responses,
            answer_choices,
            questions,
            polls,
            users,
        }
    }

    /// Record a response after validating it against the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::NotFound`] when the respondent, answer choice,
    /// question, or poll is missing; [`MiniPollError::ResponseRejected`] when
    /// the respondent already answered the question or authored the poll; or
    /// a storage error propagated from the repositories.
    #[tracing::instrument(
        skip(self, response),
        fields(
            answer_choice_id = %response.answer_choice_id,
            respondent_id = %response.respondent_id,
        )
    )]
    pub async fn create_response(&self, response: NewResponse) -> Result<Response, MiniPollError> {
        if self.users.get_by_id(response.respondent_id).await?.is_none() {
            return Err(NotFoundError::new("User", response.respondent_id).into());
        }

        let answer_choice = self
            .answer_choices
            .get_by_id(response.answer_choice_id)
            .await?
            .ok_or_else(|| NotFoundError::new("AnswerChoice", response.answer_choice_id))?;
        let question = self
            .questions
            .get_by_id(answer_choice.question_id)
            .await?
            .ok_or_else(|| NotFoundError::new("Question", answer_choice.question_id))?;
        let poll = self
            .polls
            .get_by_id(question.poll_id)
            .await?
            .ok_or_else(|| NotFoundError::new("Poll", question.poll_id))?;

        let siblings = self.responses.find_by_question(question.id).await?;
        if let Err(violations) = response.check(&question, &poll, &siblings) {
            tracing::warn!(%violations, "response rejected");
            return Err(violations.into());
        }

        let created = self.responses.create(response).await?;
        tracing::debug!(response_id = %created.id, "response recorded");
        Ok(created)
    }

    /// List every response a user submitted.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_responses_by_respondent(
        &self,
        respondent_id: UserId,
    ) -> Result<Vec<Response>, MiniPollError> {
        self.responses.find_by_respondent(respondent_id).await
    }
}
