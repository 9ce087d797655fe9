//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_quizsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum QuizSystemError {
            $($variant(String),)*
        }

        impl QuizSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(QuizSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(QuizSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(QuizSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl QuizSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        QuizSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_quizsystem_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    NoQuestionsAvailable("E003", "No Questions Available"),
    StorageOperation("E004", "Storage Operation Error"),
    Serialization("E005", "Serialization Error"),
    DateParse("E006", "Date Parse Error"),
    SeedSource("E007", "Seed Source Error"),
    FileOperation("E008", "File Operation Error"),
    Internal("E009", "Internal Error"),
}

impl QuizSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for QuizSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for QuizSystemError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for QuizSystemError {
    fn from(err: std::io::Error) -> Self {
        QuizSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for QuizSystemError {
    fn from(err: serde_json::Error) -> Self {
        QuizSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for QuizSystemError {
    fn from(err: chrono::ParseError) -> Self {
        QuizSystemError::DateParse(err.to_string())
    }
}

impl From<csv::Error> for QuizSystemError {
    fn from(err: csv::Error) -> Self {
        QuizSystemError::SeedSource(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuizSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QuizSystemError::validation("test").code(), "E001");
        assert_eq!(QuizSystemError::not_found("test").code(), "E002");
        assert_eq!(QuizSystemError::no_questions_available("test").code(), "E003");
        assert_eq!(QuizSystemError::storage_operation("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            QuizSystemError::no_questions_available("test").error_type(),
            "No Questions Available"
        );
        assert_eq!(
            QuizSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = QuizSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = QuizSystemError::not_found("Quiz 42 not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Quiz 42 not found"));
    }
}
