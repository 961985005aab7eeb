//! # minipoll-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository`, `PollRepository`, `QuestionRepository`,
//!     `AnswerChoiceRepository`, `ResponseRepository`: create and look up
//!   - `ReportStore`: the two aggregate report queries
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService`: register users, enforce unique names
//!   - `PollService`: create polls for an existing author
//!   - `QuestionService`: questions and their answer choices
//!   - `ResponseService`: record responses after every response rule passes
//!   - `ReportService`: answer tallies and poll completion per user
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `minipoll-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
