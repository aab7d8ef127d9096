pub mod report;
pub mod session;

pub use report::{QuestionReport, QuizReport};
pub use session::{QuizSession, MAX_MISTAKES};
