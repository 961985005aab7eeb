//! Poll service: creating and looking up polls.

use minipoll_domain::error::{MiniPollError, NotFoundError};
use minipoll_domain::id::PollId;
use minipoll_domain::poll::{NewPoll, Poll};

use crate::ports::{PollRepository, UserRepository};

/// Application service for polls.
pub struct PollService<P, U> {
    polls: P,
    users: U,
}

impl<P: PollRepository, U: UserRepository> PollService<P, U> {
    /// Create a new service backed by the given repositories.
    pub fn new(polls: P, users: U) -> Self {
        Self { polls, users }
    }

    /// Create a poll owned by an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::NotFound`] when the author does not exist, or
    /// a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, poll), fields(author_id = %poll.author_id))]
    pub async fn create_poll(&self, poll: NewPoll) -> Result<Poll, MiniPollError> {
        if self.users.get_by_id(poll.author_id).await?.is_none() {
            return Err(NotFoundError::new("User", poll.author_id).into());
        }
        let created = self.polls.create(poll).await?;
        tracing::debug!(poll_id = %created.id, "poll created");
        Ok(created)
    }

    /// Look up a poll by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::NotFound`] when no poll with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_poll(&self, id: PollId) -> Result<Poll, MiniPollError> {
        self.polls
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Poll", id).into())
    }

    /// List all polls.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_polls(&self) -> Result<Vec<Poll>, MiniPollError> {
        self.polls.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::InMemoryStore;
    use minipoll_domain::id::UserId;
    use minipoll_domain::user::NewUser;

    #[tokio::test]
    async fn should_create_poll_for_existing_author() {
        let store = InMemoryStore::default();
        let author = UserRepository::create(&store, NewUser::new("alice"))
            .await
            .unwrap();
        let svc = PollService::new(store.clone(), store);

        let poll = svc
            .create_poll(NewPoll::new("Lunch", author.id))
            .await
            .unwrap();

        let fetched = svc.get_poll(poll.id).await.unwrap();
        assert_eq!(fetched.title, "Lunch");
        assert_eq!(fetched.author_id, author.id);
    }

    #[tokio::test]
    async fn should_reject_poll_when_author_missing() {
        let store = InMemoryStore::default();
        let svc = PollService::new(store.clone(), store);

        let result = svc.create_poll(NewPoll::new("Lunch", UserId::new(7))).await;

        assert!(matches!(result, Err(MiniPollError::NotFound(ref err)) if err.entity == "User"));
        assert!(svc.list_polls().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_poll_missing() {
        let store = InMemoryStore::default();
        let svc = PollService::new(store.clone(), store);
        let result = svc.get_poll(PollId::new(1)).await;
        assert!(matches!(result, Err(MiniPollError::NotFound(_))));
    }
}
