//! Report assembly and rendering.

use std::io::{self, Write};

use serde::Serialize;

use minipoll_adapter_storage_sqlite_sqlx::{
    Database, SqliteAnswerChoiceRepository, SqlitePollRepository, SqliteQuestionRepository,
    SqliteReportStore, SqliteUserRepository,
};
use minipoll_app::services::poll_service::PollService;
use minipoll_app::services::question_service::QuestionService;
use minipoll_app::services::report_service::ReportService;
use minipoll_app::services::user_service::UserService;
use minipoll_domain::error::MiniPollError;
use minipoll_domain::poll::Poll;
use minipoll_domain::question::Question;
use minipoll_domain::report::{AnswerTally, PollCompletion};
use minipoll_domain::user::User;

use crate::config::ReportFormat;

/// The services the report reads from, wired to one `SQLite` database.
pub struct Services {
    pub users: UserService<SqliteUserRepository>,
    pub polls: PollService<SqlitePollRepository, SqliteUserRepository>,
    pub questions: QuestionService<
        SqliteQuestionRepository,
        SqliteAnswerChoiceRepository,
        SqlitePollRepository,
    >,
    pub reports: ReportService<SqliteReportStore, SqliteQuestionRepository, SqliteUserRepository>,
}

impl Services {
    #[must_use]
    pub fn new(db: &Database) -> Self {
        let pool = db.pool();
        let users = SqliteUserRepository::new(pool.clone());
        let polls = SqlitePollRepository::new(pool.clone());
        let questions = SqliteQuestionRepository::new(pool.clone());
        let answer_choices = SqliteAnswerChoiceRepository::new(pool.clone());
        let store = SqliteReportStore::new(pool.clone());

        Self {
            users: UserService::new(users.clone()),
            polls: PollService::new(polls.clone(), users.clone()),
            questions: QuestionService::new(questions.clone(), answer_choices, polls),
            reports: ReportService::new(store, questions, users),
        }
    }
}

/// Completion status of every answerable poll for one user.
#[derive(Debug, Serialize)]
pub struct UserSection {
    pub user: User,
    pub completed: Vec<PollCompletion>,
    pub uncompleted: Vec<PollCompletion>,
}

/// Answer tallies of one question.
#[derive(Debug, Serialize)]
pub struct QuestionSection {
    pub poll: Poll,
    pub question: Question,
    pub tallies: Vec<AnswerTally>,
}

/// Everything the binary prints.
#[derive(Debug, Serialize)]
pub struct Report {
    pub users: Vec<UserSection>,
    pub questions: Vec<QuestionSection>,
}

impl Report {
    /// Read every user, poll and question and compute their report views.
    ///
    /// # Errors
    ///
    /// Returns the first [`MiniPollError`] raised by a service.
    #[tracing::instrument(skip(services))]
    pub async fn collect(services: &Services) -> Result<Self, MiniPollError> {
        let mut users = Vec::new();
        for user in services.users.list_users().await? {
            let completed = services.reports.completed_polls(user.id).await?;
            let uncompleted = services.reports.uncompleted_polls(user.id).await?;
            users.push(UserSection {
                user,
                completed,
                uncompleted,
            });
        }

        let mut questions = Vec::new();
        for poll in services.polls.list_polls().await? {
            for question in services.questions.list_questions(poll.id).await? {
                let tallies = services.reports.question_results(question.id).await?;
                questions.push(QuestionSection {
                    poll: poll.clone(),
                    question,
                    tallies,
                });
            }
        }

        tracing::info!(
            users = users.len(),
            questions = questions.len(),
            "report collected"
        );
        Ok(Self { users, questions })
    }

    /// Write the report in the requested format.
    ///
    /// # Errors
    ///
    /// Returns any I/O or serialization error from the writer.
    pub fn render<W: Write>(&self, format: ReportFormat, out: &mut W) -> io::Result<()> {
        match format {
            ReportFormat::Text => self.write_text(out),
            ReportFormat::Json => self.write_json(out),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Poll completion")?;
        for section in &self.users {
            writeln!(out, "  {} (#{})", section.user.user_name, section.user.id)?;
            write_completions(out, "completed", &section.completed)?;
            write_completions(out, "uncompleted", &section.uncompleted)?;
        }

        writeln!(out, "Question results")?;
        for section in &self.questions {
            writeln!(
                out,
                "  {} / {} (#{})",
                section.poll.title, section.question.text, section.question.id
            )?;
            if section.tallies.is_empty() {
                writeln!(out, "    (no answer choices)")?;
            }
            for tally in &section.tallies {
                writeln!(out, "    {}: {}", tally.answer_choice.choice, tally.count)?;
            }
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.users)?;
        writeln!(out)?;
        serde_json::to_writer_pretty(&mut *out, &self.questions)?;
        writeln!(out)
    }
}

fn write_completions<W: Write>(
    out: &mut W,
    label: &str,
    completions: &[PollCompletion],
) -> io::Result<()> {
    if completions.is_empty() {
        return writeln!(out, "    {label}: none");
    }
    writeln!(out, "    {label}:")?;
    for completion in completions {
        writeln!(
            out,
            "      {} (#{}) {}/{}",
            completion.poll.title,
            completion.poll.id,
            completion.responses_count,
            completion.questions_count
        )?;
    }
    Ok(())
}
