//! Report port: aggregate read queries.

use std::future::Future;

use minipoll_domain::error::MiniPollError;
use minipoll_domain::id::{QuestionId, UserId};
use minipoll_domain::report::{AnswerTally, PollCompletion};

/// Computes the read-only report views. Implementations must not mutate
/// state.
pub trait ReportStore {
    /// One tally per answer choice of `question_id`, ordered by answer choice
    /// id. Choices nobody picked are included with a count of zero.
    fn question_results(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<AnswerTally>, MiniPollError>> + Send;

    /// One row per poll that has at least one question with at least one
    /// answer choice, ordered by poll id, counting `user_id`'s responses.
    fn poll_completions(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<PollCompletion>, MiniPollError>> + Send;
}
