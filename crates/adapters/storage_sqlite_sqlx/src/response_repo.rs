//! `SQLite` implementation of [`ResponseRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use minipoll_app::ports::ResponseRepository;
use minipoll_domain::error::MiniPollError;
use minipoll_domain::id::{AnswerChoiceId, QuestionId, ResponseId, UserId};
use minipoll_domain::response::{NewResponse, Response};
use minipoll_domain::time::{format, now};

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Response`].
struct Wrapper(Response);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Response {
            id: ResponseId::new(row.try_get("id")?),
            answer_choice_id: AnswerChoiceId::new(row.try_get("answer_choice_id")?),
            respondent_id: UserId::new(row.try_get("respondent_id")?),
            created_at: decode::timestamp(row, "created_at")?,
            updated_at: decode::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO responses (answer_choice_id, respondent_id, created_at, updated_at)
    VALUES (?, ?, ?, ?)
    RETURNING *
";
const SELECT_BY_QUESTION: &str = r"
    SELECT responses.*
    FROM responses
    INNER JOIN answer_choices ON answer_choices.id = responses.answer_choice_id
    WHERE answer_choices.question_id = ?
    ORDER BY responses.id
";
const SELECT_BY_RESPONDENT: &str = "SELECT * FROM responses WHERE respondent_id = ? ORDER BY id";

/// `SQLite`-backed response repository.
#[derive(Clone)]
pub struct SqliteResponseRepository {
    pool: SqlitePool,
}

impl SqliteResponseRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ResponseRepository for SqliteResponseRepository {
    fn create(
        &self,
        response: NewResponse,
    ) -> impl Future<Output = Result<Response, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = format(now());
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(response.answer_choice_id.get())
                .bind(response.respondent_id.get())
                .bind(&ts)
                .bind(&ts)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn find_by_question(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<Response>, MiniPollError>> + Send {
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

    fn find_by_respondent(
        &self,
        respondent_id: UserId,
    ) -> impl Future<Output = Result<Vec<Response>, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_RESPONDENT)
                .bind(respondent_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
