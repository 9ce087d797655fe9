use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{QuizService, assemble};
use crate::models::quizzes::requests::CreateQuizRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_data: CreateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 参数校验
    if quiz_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Field 'title' must not be empty",
        )));
    }
    if quiz_data.turma.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Field 'turma' must not be empty",
        )));
    }
    if quiz_data.question_count < 1 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Field 'question_count' must be at least 1",
        )));
    }

    // 题库为空时直接拒绝，避免留下零题测验
    let pool = match storage.list_questions().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to read question pool: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to read question pool",
                )),
            );
        }
    };
    if pool.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoQuestionsAvailable,
            "No questions available to assemble a quiz",
        )));
    }

    let quiz = match storage.create_quiz(quiz_data).await {
        Ok(quiz) => quiz,
        Err(e) => {
            error!("Failed to create quiz: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create quiz",
                )),
            );
        }
    };

    // 随机组卷
    let mut rng = rand::rng();
    match assemble::assemble_quiz(&storage, &quiz, &mut rng).await {
        Ok(selected) => {
            info!(
                "Quiz {} assembled with {} questions for turma {}",
                quiz.id,
                selected.len(),
                quiz.turma
            );
        }
        Err(e) => {
            error!("Failed to assemble quiz {}: {}", quiz.id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to assemble quiz: {e}"),
                )),
            );
        }
    }

    // 重新读取，携带组卷降级后修正的 question_count
    match storage.get_quiz_by_id(quiz.id).await {
        Ok(Some(quiz)) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(quiz, "Quiz created successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "Quiz not found after assembly",
        ))),
        Err(e) => {
            error!("Failed to reload quiz {}: {}", quiz.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to reload quiz",
                )),
            )
        }
    }
}
