//! Poll: a titled collection of questions owned by its author.

use serde::{Deserialize, Serialize};

use crate::id::{PollId, UserId};
use crate::time::Timestamp;

/// A persisted poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub title: String,
    pub author_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Poll {
    /// Whether `user_id` wrote this poll.
    #[must_use]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Input for creating a [`Poll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPoll {
    pub title: String,
    pub author_id: UserId,
}

impl NewPoll {
    #[must_use]
    pub fn new(title: impl Into<String>, author_id: UserId) -> Self {
        Self {
            title: title.into(),
            author_id,
        }
    }
}
