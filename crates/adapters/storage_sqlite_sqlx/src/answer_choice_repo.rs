//! `SQLite` implementation of [`AnswerChoiceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use minipoll_app::ports::AnswerChoiceRepository;
use minipoll_domain::answer_choice::{AnswerChoice, NewAnswerChoice};
use minipoll_domain::error::MiniPollError;
use minipoll_domain::id::{AnswerChoiceId, QuestionId};
use minipoll_domain::time::{format, now};

use crate::decode;
use crate::error::StorageError;

/// Read the `answer_choices` columns of a row.
pub(crate) fn answer_choice_from_row(row: &SqliteRow) -> Result<AnswerChoice, sqlx::Error> {
    Ok(AnswerChoice {
        id: AnswerChoiceId::new(row.try_get("id")?),
        question_id: QuestionId::new(row.try_get("question_id")?),
        choice: row.try_get("choice")?,
        created_at: decode::timestamp(row, "created_at")?,
        updated_at: decode::timestamp(row, "updated_at")?,
    })
}

/// Wrapper for converting database rows into domain [`AnswerChoice`].
struct Wrapper(AnswerChoice);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        answer_choice_from_row(row).map(Self)
    }
}

const INSERT: &str = r"
    INSERT INTO answer_choices (question_id, choice, created_at, updated_at)
    VALUES (?, ?, ?, ?)
    RETURNING *
";
const SELECT_BY_ID: &str = "SELECT * FROM answer_choices WHERE id = ?";
const SELECT_BY_QUESTION: &str =
    "SELECT * FROM answer_choices WHERE question_id = ? ORDER BY id";

/// `SQLite`-backed answer choice repository.
#[derive(Clone)]
pub struct SqliteAnswerChoiceRepository {
    pool: SqlitePool,
}

impl SqliteAnswerChoiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AnswerChoiceRepository for SqliteAnswerChoiceRepository {
    fn create(
        &self,
        answer_choice: NewAnswerChoice,
    ) -> impl Future<Output = Result<AnswerChoice, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = format(now());
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(answer_choice.question_id.get())
                .bind(&answer_choice.choice)
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
        id: AnswerChoiceId,
    ) -> impl Future<Output = Result<Option<AnswerChoice>, MiniPollError>> + Send {
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

    fn find_by_question(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<AnswerChoice>, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_QUESTION)
                .bind(question_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
