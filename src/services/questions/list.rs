use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::questions::requests::QuestionQueryParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_questions(
    service: &QuestionService,
    request: &HttpRequest,
    params: QuestionQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match params.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            storage.list_questions_by_category(category).await
        }
        _ => storage.list_questions().await,
    };

    match result {
        Ok(questions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            questions,
            "Questions retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list questions: {e}"),
            )),
        ),
    }
}

pub async fn list_alternatives(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_question_by_id(question_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch question: {e}"),
                )),
            );
        }
    }

    match storage.list_alternatives_by_question(question_id).await {
        Ok(alternatives) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            alternatives,
            "Alternatives retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list alternatives: {e}"),
            )),
        ),
    }
}
