pub mod attempts;
pub mod common;
pub mod questions;
pub mod quizzes;
pub mod statistics;
pub mod students;

pub use common::response::ApiResponse;

// 应用启动时间（用于启动耗时统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 统一的业务错误码（随 ApiResponse 返回给调用方）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 请求参数错误
    BadRequest = 40000,

    // 资源不存在
    NotFound = 40400,
    QuizNotFound = 40401,
    QuestionNotFound = 40402,
    StudentNotFound = 40403,
    AttemptNotFound = 40404,

    // 业务状态错误
    NoQuestionsAvailable = 42200,

    // 导入相关错误
    FileUploadFailed = 42210,
    ImportFileMissingColumn = 42211,
    ImportFileParseFailed = 42212,
    ImportFileDataInvalid = 42213,

    // 服务器内部错误
    InternalServerError = 50000,
}
