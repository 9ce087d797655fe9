pub mod attempts;

pub mod imports;

pub mod questions;

pub mod quizzes;

pub mod students;

pub use attempts::configure_attempts_routes;
pub use imports::configure_import_routes;
pub use questions::configure_questions_routes;
pub use quizzes::configure_quizzes_routes;
pub use students::configure_students_routes;
