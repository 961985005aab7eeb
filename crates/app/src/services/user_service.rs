//! User service: registering and looking up users.

use minipoll_domain::error::{MiniPollError, NotFoundError, ValidationError};
use minipoll_domain::id::UserId;
use minipoll_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for users.
pub struct UserService<U> {
    users: U,
}

impl<U: UserRepository> UserService<U> {
    /// Create a new service backed by the given repository.
    pub fn new(users: U) -> Self {
        Self { users }
    }

    /// Register a user after checking the name is present and unused.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::Validation`] with
    /// [`ValidationError::BlankUserName`] or [`ValidationError::UserNameTaken`],
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, user), fields(user_name = %user.user_name))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, MiniPollError> {
        user.validate()?;
        if self.users.find_by_user_name(&user.user_name).await?.is_some() {
            tracing::warn!("user name already taken");
            return Err(ValidationError::UserNameTaken(user.user_name).into());
        }
        let created = self.users.create(user).await?;
        tracing::debug!(user_id = %created.id, "user created");
        Ok(created)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MiniPollError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, MiniPollError> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("User", id).into())
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, MiniPollError> {
        self.users.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::InMemoryStore;

    fn make_service() -> UserService<InMemoryStore> {
        UserService::new(InMemoryStore::default())
    }

    #[tokio::test]
    async fn should_create_user_when_name_is_free() {
        let svc = make_service();

        let created = svc.create_user(NewUser::new("alice")).await.unwrap();

        let fetched = svc.get_user(created.id).await.unwrap();
        assert_eq!(fetched.user_name, "alice");
    }

    #[tokio::test]
    async fn should_reject_second_user_with_same_name() {
        let svc = make_service();
        svc.create_user(NewUser::new("alice")).await.unwrap();

        let result = svc.create_user(NewUser::new("alice")).await;

        assert!(matches!(
            result,
            Err(MiniPollError::Validation(ValidationError::UserNameTaken(ref name))) if name == "alice"
        ));
        assert_eq!(svc.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_blank_user_name() {
        let svc = make_service();

        let result = svc.create_user(NewUser::new("  ")).await;

        assert!(matches!(
            result,
            Err(MiniPollError::Validation(ValidationError::BlankUserName))
        ));
        assert!(svc.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::new(99)).await;
        assert!(matches!(result, Err(MiniPollError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_users_in_creation_order() {
        let svc = make_service();
        svc.create_user(NewUser::new("alice")).await.unwrap();
        svc.create_user(NewUser::new("bob")).await.unwrap();

        let names: Vec<String> = svc
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.user_name)
            .collect();
        assert_eq!(names, ["alice", "bob"]);
    }
}
