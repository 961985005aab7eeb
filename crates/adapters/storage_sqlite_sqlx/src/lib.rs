//! # minipoll-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `minipoll-app::ports::storage`
//! - Implement the `ReportStore` port with the two aggregate SQL queries
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `minipoll-app` (for port traits) and `minipoll-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod decode;

pub mod answer_choice_repo;
pub mod error;
pub mod poll_repo;
pub mod pool;
pub mod question_repo;
pub mod report_store;
pub mod response_repo;
pub mod user_repo;

pub use answer_choice_repo::SqliteAnswerChoiceRepository;
pub use error::StorageError;
pub use poll_repo::SqlitePollRepository;
pub use pool::{Config, Database};
pub use question_repo::SqliteQuestionRepository;
pub use report_store::SqliteReportStore;
pub use response_repo::SqliteResponseRepository;
pub use user_repo::SqliteUserRepository;
