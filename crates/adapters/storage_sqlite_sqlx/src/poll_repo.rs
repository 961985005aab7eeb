//! `SQLite` implementation of [`PollRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use minipoll_app::ports::PollRepository;
use minipoll_domain::error::MiniPollError;
use minipoll_domain::id::{PollId, UserId};
use minipoll_domain::poll::{NewPoll, Poll};
use minipoll_domain::time::{format, now};

use crate::decode;
use crate::error::StorageError;

/// Read the `polls` columns of a row. Also used by the report store, whose
/// rows carry aggregate columns next to them.
pub(crate) fn poll_from_row(row: &SqliteRow) -> Result<Poll, sqlx::Error> {
    Ok(Poll {
        id: PollId::new(row.try_get("id")?),
        title: row.try_get("title")?,
        author_id: UserId::new(row.try_get("author_id")?),
        created_at: decode::timestamp(row, "created_at")?,
        updated_at: decode::timestamp(row, "updated_at")?,
    })
}

/// Wrapper for converting database rows into domain [`Poll`].
struct Wrapper(Poll);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        poll_from_row(row).map(Self)
    }
}

const INSERT: &str = r"
    INSERT INTO polls (title, author_id, created_at, updated_at)
    VALUES (?, ?, ?, ?)
    RETURNING *
";
const SELECT_BY_ID: &str = "SELECT * FROM polls WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM polls ORDER BY id";

/// `SQLite`-backed poll repository.
#[derive(Clone)]
pub struct SqlitePollRepository {
    pool: SqlitePool,
}

impl SqlitePollRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PollRepository for SqlitePollRepository {
    fn create(&self, poll: NewPoll) -> impl Future<Output = Result<Poll, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = format(now());
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&poll.title)
                .bind(poll.author_id.get())
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
        id: PollId,
    ) -> impl Future<Output = Result<Option<Poll>, MiniPollError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Poll>, MiniPollError>> + Send {
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
