//! # minipoll-domain
//!
//! Pure domain model for the minipoll polling application.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Users** (poll authors and respondents)
//! - Define **Polls** (named collections of questions owned by an author)
//! - Define **Questions** and their **Answer choices**
//! - Define **Responses** (a respondent's pick of one answer choice)
//! - Define the **report** views (answer tallies, poll completion)
//! - Contain all invariant enforcement that needs no IO
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod answer_choice;
pub mod poll;
pub mod question;
pub mod report;
pub mod response;
pub mod user;
