pub mod exchange;
pub mod lesson;
pub mod role;

pub use exchange::{AskRequest, Exchange};
pub use lesson::{FileType, Lesson, QuizItem};
pub use role::Role;
