//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use minipoll_app::ports::UserRepository;
use minipoll_domain::error::{MiniPollError, ValidationError};
use minipoll_domain::id::UserId;
use minipoll_domain::time::{format, now};
use minipoll_domain::user::{NewUser, User};

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::new(row.try_get("id")?),
            user_name: row.try_get("user_name")?,
            created_at: decode::timestamp(row, "created_at")?,
            updated_at: decode::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO users (user_name, created_at, updated_at) VALUES (?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_BY_USER_NAME: &str = "SELECT * FROM users WHERE user_name = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY id";

/// `SQLite`-backed user repository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = format(now());
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&user.user_name)
                .bind(&ts)
                .bind(&ts)
                .fetch_one(&pool)
                .await
                .map_err(|err| match err {
                    sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                        MiniPollError::from(ValidationError::UserNameTaken(user.user_name.clone()))
                    }
                    other => StorageError::from(other).into(),
                })?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> impl Future<Output = Result<Option<User>, MiniPollError>> + Send {
        let pool = self.pool.clone();
        let user_name = user_name.to_owned();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_USER_NAME)
                .bind(user_name)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
