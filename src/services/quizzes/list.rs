use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_quizzes_by_instructor(
    service: &QuizService,
    request: &HttpRequest,
    instructor_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_quizzes_by_instructor(instructor_id).await {
        Ok(quizzes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            quizzes,
            "Quizzes retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list quizzes: {e}"),
            )),
        ),
    }
}

pub async fn list_quizzes_by_turma(
    service: &QuizService,
    request: &HttpRequest,
    turma: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_quizzes_by_turma(&turma).await {
        Ok(quizzes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            quizzes,
            "Quizzes retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list quizzes: {e}"),
            )),
        ),
    }
}
