//! `SQLite` implementation of [`ReportStore`].
//!
//! Both reports are single aggregate queries. The tally uses an outer join so
//! choices without responses still appear. The completion query inner-joins
//! questions and answer choices, so polls without an answerable question are
//! left out entirely.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use minipoll_app::ports::ReportStore;
use minipoll_domain::error::MiniPollError;
use minipoll_domain::id::{QuestionId, UserId};
use minipoll_domain::report::{AnswerTally, PollCompletion};

use crate::answer_choice_repo::answer_choice_from_row;
use crate::decode;
use crate::error::StorageError;
use crate::poll_repo::poll_from_row;

struct TallyRow(AnswerTally);

impl<'r> FromRow<'r, SqliteRow> for TallyRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(AnswerTally {
            answer_choice: answer_choice_from_row(row)?,
            count: decode::count(row, "responses_count")?,
        }))
    }
}

struct CompletionRow(PollCompletion);

impl<'r> FromRow<'r, SqliteRow> for CompletionRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(PollCompletion {
            poll: poll_from_row(row)?,
            questions_count: decode::count(row, "questions_count")?,
            responses_count: decode::count(row, "responses_count")?,
        }))
    }
}

const SELECT_TALLIES: &str = r"
    SELECT answer_choices.*, COUNT(responses.id) AS responses_count
    FROM answer_choices
    LEFT OUTER JOIN responses ON responses.answer_choice_id = answer_choices.id
    WHERE answer_choices.question_id = ?
    GROUP BY answer_choices.id
    ORDER BY answer_choices.id
";

const SELECT_COMPLETIONS: &str = r"
    SELECT polls.*,
           COUNT(DISTINCT questions.id) AS questions_count,
           COUNT(users_responses.id) AS responses_count
    FROM polls
    INNER JOIN questions ON questions.poll_id = polls.id
    INNER JOIN answer_choices ON answer_choices.question_id = questions.id
    LEFT OUTER JOIN (
        SELECT responses.* FROM responses WHERE responses.respondent_id = ?
    ) AS users_responses ON users_responses.answer_choice_id = answer_choices.id
    GROUP BY polls.id
    ORDER BY polls.id
";

/// `SQLite`-backed report queries.
#[derive(Clone)]
pub struct SqliteReportStore {
    pool: SqlitePool,
}

impl SqliteReportStore {
    /// Create a new report store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReportStore for SqliteReportStore {
    fn question_results(
        &self,
        question_id: QuestionId,
    ) -> impl Future<Output = Result<Vec<AnswerTally>, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<TallyRow> = sqlx::query_as(SELECT_TALLIES)
                .bind(question_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn poll_completions(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<PollCompletion>, MiniPollError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<CompletionRow> = sqlx::query_as(SELECT_COMPLETIONS)
                .bind(user_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }
}
