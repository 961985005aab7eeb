//! `SQLite` implementation of [`QuestionRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use minipoll_app::ports::QuestionRepository;
use minipoll_domain::error::MiniPollError;
use minipoll_domain::id::{PollId, QuestionId};
use minipoll_domain::question::{NewQuestion, Question};
use minipoll_domain::time::{format, now};

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Question`].
struct Wrapper(Question);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Question {
            id: QuestionId::new(row.try_get("id")?),
            poll_id: PollId::new(row.try_get("poll_id")?),
            text: row.try_get("text")?,
            created_at: decode::timestamp(row, "created_at")?,
            updated_at: decode::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO questions (poll_id, text, created_at, updated_at)
    VALUES (?, ?, ?, ?)
    RETURNING *
";
const SELECT_BY_ID: &str = "SELECT * FROM questions WHERE id = ?";
const SELECT_BY_POLL: &str = "SELECT * FROM questions WHERE poll_id = ? ORDER BY id";

/// `SQLite`-backed question repository.
#[derive(Clone)]
pub struct SqliteQuestionRepository {
    pool: SqlitePool,
}

impl SqliteQuestionRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl QuestionRepository for SqliteQuestionRepository {
    fn create(
        &self,
        question: NewQuestion,
    ) -> impl Future<Output = Result<Question, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = format(now());
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(question.poll_id.get())
                .bind(&question.text)
                .bind(&ts)
                .bind(&ts)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: QuestionId,
    ) -> impl Future<Output = Result<Option<Question>, MiniPollError>> + Send {
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

    fn find_by_poll(
        &self,
        poll_id: PollId,
    ) -> impl Future<Output = Result<Vec<Question>, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_POLL)
                .bind(poll_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
