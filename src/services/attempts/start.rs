use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttemptService;
use crate::errors::Result;
use crate::models::attempts::entities::StudentQuiz;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 查找或创建尝试记录，返回 (记录, 是否新建)
///
/// 先查后建，不是原子操作：并发的同对 (student, quiz) 请求
/// 可能各自建出一条记录。课堂规模下可容忍，此处不加锁。
pub(crate) async fn get_or_create_attempt(
    storage: &Arc<dyn Storage>,
    student_id: i64,
    quiz_id: i64,
) -> Result<(StudentQuiz, bool)> {
    if let Some(existing) = storage.get_student_quiz_by_ids(student_id, quiz_id).await? {
        return Ok((existing, false));
    }

    let created = storage.create_student_quiz(student_id, quiz_id).await?;
    Ok((created, true))
}

pub async fn start_attempt(
    service: &AttemptService,
    request: &HttpRequest,
    student_id: i64,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 引用校验
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch student: {e}"),
                )),
            );
        }
    }
    match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch quiz: {e}"),
                )),
            );
        }
    }

    match get_or_create_attempt(&storage, student_id, quiz_id).await {
        Ok((attempt, true)) => {
            info!("Student {} started quiz {}", student_id, quiz_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(attempt, "Quiz attempt started")))
        }
        Ok((attempt, false)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            attempt,
            "Quiz attempt already started",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to start quiz attempt: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::get_or_create_attempt;
    use crate::storage::{Storage, memory::MemoryStorage};

    #[tokio::test]
    async fn test_start_attempt_is_idempotent() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        let (first, created_first) = get_or_create_attempt(&storage, 1, 2).await.unwrap();
        let (second, created_second) = get_or_create_attempt(&storage, 1, 2).await.unwrap();

        assert!(created_first);
        assert!(!created_second);
        assert_eq!(first.id, second.id);

        // 不产生第二条记录
        let attempts = storage.list_student_quizzes_by_student(1).await.unwrap();
        assert_eq!(attempts.len(), 1);
    }

    #[tokio::test]
    async fn test_different_pairs_get_separate_attempts() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        let (a, _) = get_or_create_attempt(&storage, 1, 2).await.unwrap();
        let (b, _) = get_or_create_attempt(&storage, 1, 3).await.unwrap();
        let (c, _) = get_or_create_attempt(&storage, 2, 2).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_ne!(b.id, c.id);
    }
}
