//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod report_store;
pub mod storage;

pub use report_store::ReportStore;
pub use storage::{
    AnswerChoiceRepository, PollRepository, QuestionRepository, ResponseRepository,
    UserRepository,
};
