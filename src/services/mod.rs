pub mod attempts;
pub mod questions;
pub mod quizzes;
pub mod statistics;
pub mod students;

pub use attempts::AttemptService;
pub use questions::QuestionService;
pub use quizzes::QuizService;
pub use statistics::StatisticsService;
pub use students::StudentService;
