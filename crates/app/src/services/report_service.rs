//! Report service: answer tallies and per-user poll completion.
//!
//! `completed_polls` and `uncompleted_polls` filter one call to
//! [`ReportStore::poll_completions`], so both come from the same aggregate.

use minipoll_domain::error::{MiniPollError, NotFoundError};
use minipoll_domain::id::{QuestionId, UserId};
use minipoll_domain::report::{AnswerTally, PollCompletion};

use crate::ports::{QuestionRepository, ReportStore, UserRepository};

/// Application service for the read-only reports.
pub struct ReportService<S, Q, U> {
    store: S,
    questions: Q,
    users: U,
}

impl<S, Q, U> ReportService<S, Q, U>
where
    S: ReportStore,
    Q: QuestionRepository,
    U: UserRepository,
{
    /// Create a new service backed by the given report store and repositories.
    pub fn new(store: S, questions: Q, users: U) -> Self {
        Self {
            store,
            questions,
            users,
        }
    }

    /// Count the responses of every answer choice of a question.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::NotFound`] when the question does not exist,
    /// or a storage error from the report store.
    #[tracing::instrument(skip(self))]
    pub async fn question_results(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<AnswerTally>, MiniPollError> {
        if self.questions.get_by_id(question_id).await?.is_none() {
            return Err(NotFoundError::new("Question", question_id).into());
        }
        self.store.question_results(question_id).await
    }

    /// Completion status of every answerable poll for one user.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::NotFound`] when the user does not exist,
    /// or a storage error from the report store.
    #[tracing::instrument(skip(self))]
    pub async fn polls_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PollCompletion>, MiniPollError> {
        if self.users.get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError::new("User", user_id).into());
        }
        let completions = self.store.poll_completions(user_id).await?;
        tracing::debug!(polls = completions.len(), "poll completions computed");
        Ok(completions)
    }

    /// Polls the user answered in full.
    ///
    /// # Errors
    ///
    /// Same as [`Self::polls_for_user`].
    pub async fn completed_polls(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PollCompletion>, MiniPollError> {
        let completions = self.polls_for_user(user_id).await?;
        Ok(completions
            .into_iter()
            .filter(PollCompletion::is_complete)
            .collect())
    }

    /// Polls the user still has unanswered questions in.
    ///
    /// # Errors
    ///
    /// Same as [`Self::polls_for_user`].
    pub async fn uncompleted_polls(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PollCompletion>, MiniPollError> {
        let completions = self.polls_for_user(user_id).await?;
        Ok(completions
            .into_iter()
            .filter(|completion| !completion.is_complete())
            .collect())
    }
}
