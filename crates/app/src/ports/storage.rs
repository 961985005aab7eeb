//! Storage port: repository traits for persistence.
//!
//! Every `create` takes the id-less input type and returns the stored entity
//! with its storage-assigned id and timestamps. Listings are ordered by id,
//! which is insertion order.

use std::future::Future;

use minipoll_domain::answer_choice::{AnswerChoice, NewAnswerChoice};
use minipoll_domain::error::MiniPollError;
use minipoll_domain::id::{AnswerChoiceId, PollId, QuestionId, UserId};
use minipoll_domain::poll::{NewPoll, Poll};
use minipoll_domain::question::{NewQuestion, Question};
use minipoll_domain::response::{NewResponse, Response};
use minipoll_domain::user::{NewUser, User};

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Insert a new user.
    ///
    /// Implementations backed by a unique index report a name clash as
    /// [`ValidationError::UserNameTaken`](minipoll_domain::error::ValidationError::UserNameTaken).
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, MiniPollError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, MiniPollError>> + Send;

    /// Find the user with exactly this name.
    fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> impl Future<Output = Result<Option<User>, MiniPollError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, MiniPollError>> + Send;
}

/// Repository for persisting and querying [`Poll`]s.
pub trait PollRepository {
    /// Insert a new poll.
    fn create(&self, poll: NewPoll) -> impl Future<Output = Result<Poll, MiniPollError>> + Send;

    /// Get a poll by its unique identifier.
    fn get_by_id(
        &self,
        id: PollId,
    ) -> impl Future<Output = Result<Option<Poll>, MiniPollError>> + Send;

    /// Get all polls.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Poll>, MiniPollError>> + Send;
}

/// Repository for persisting and querying [`Question`]s.
pub trait QuestionRepository {
    /// Insert a new question.
    fn create(
        &self,
        question: NewQuestion,
    ) -> impl Future<Output = Result<Question, MiniPollError>> + Send;

    /// Get a question by its unique identifier.
    fn get_by_id(
        &self,
        id: QuestionId,
    ) -> impl Future<Output = Result<Option<Question>, MiniPollError>> + Send;

    /// Get the questions of one poll.
    fn find_by_poll(
        &self,
        poll_id: PollId,
    ) -> impl Future<Output = Result<Vec<Question>, MiniPollError>> + Send;
}

/// Repository for persisting and querying [`AnswerChoice`]s.
pub trait AnswerChoiceRepository {
    /// Insert a new answer choice.
    fn create(
        &self,
        answer_choice: NewAnswerChoice,
    ) -> impl Future<Output = Result<AnswerChoice, MiniPollError>> + Send;

    /// Get an answer choice by its unique identifier.
    fn get_by_id(
        &self,
        id: AnswerChoiceId,
    ) -> impl Future<Output = Result<Option<AnswerChoice>, MiniPollError>> + Send;

    /// Get the answer choices of one question.
    fn find_by_question(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<AnswerChoice>, MiniPollError>> + Send;
}

/// Repository for persisting and querying [`Response`]s.
pub trait ResponseRepository {
    /// Insert a new response.
    fn create(
        &self,
        response: NewResponse,
    ) -> impl Future<Output = Result<Response, MiniPollError>> + Send;

    /// Get every response to any answer choice of `question_id`.
    fn find_by_question(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<Response>, MiniPollError>> + Send;

    /// Get every response submitted by `respondent_id`.
    fn find_by_respondent(
        &self,
        respondent_id: UserId,
    ) -> impl Future<Output = Result<Vec<Response>, MiniPollError>> + Send;
}
