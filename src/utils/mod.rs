pub mod extractor;
pub mod parameter_error_handler;

pub use extractor::{SafeInstructorIdI64, SafeQuestionIdI64, SafeQuizIdI64, SafeStudentIdI64};
pub use parameter_error_handler::{json_error_handler, query_error_handler};
