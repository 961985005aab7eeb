//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod poll_service;
pub mod question_service;
pub mod report_service;
pub mod response_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod testing;
