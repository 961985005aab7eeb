//! Read-only report views computed by the storage layer.

use serde::{Deserialize, Serialize};

use crate::answer_choice::AnswerChoice;
use crate::poll::Poll;

/// One answer choice of a question with the number of responses it got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerTally {
    pub answer_choice: AnswerChoice,
    pub count: u64,
}

/// How far one user got through one poll.
///
/// Only polls with at least one question that has at least one answer choice
/// get a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollCompletion {
    pub poll: Poll,
    /// Distinct answerable questions in the poll.
    pub questions_count: u64,
    /// The user's responses to those questions.
    pub responses_count: u64,
}

impl PollCompletion {
    /// A poll is complete once the user answered every question.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.questions_count == self.responses_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{PollId, UserId};
    use crate::time::now;

    fn completion(questions_count: u64, responses_count: u64) -> PollCompletion {
        let ts = now();
        PollCompletion {
            poll: Poll {
                id: PollId::new(1),
                title: "Weekend".to_string(),
                author_id: UserId::new(1),
                created_at: ts,
                updated_at: ts,
            },
            questions_count,
            responses_count,
        }
    }

    #[test]
    fn should_be_complete_when_every_question_answered() {
        assert!(completion(2, 2).is_complete());
    }

    #[test]
    fn should_be_incomplete_when_questions_remain() {
        assert!(!completion(2, 1).is_complete());
        assert!(!completion(3, 0).is_complete());
    }

    #[test]
    fn should_serialize_counts_next_to_poll() {
        let json = serde_json::to_value(completion(2, 1)).unwrap();
        assert_eq!(json["questions_count"], 2);
        assert_eq!(json["responses_count"], 1);
        assert_eq!(json["poll"]["title"], "Weekend");
    }
}
