use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::QuizService;
use crate::models::quizzes::requests::UpdateQuizStatusRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn set_quiz_active(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    update_data: UpdateQuizStatusRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_quiz_active(quiz_id, update_data.active).await {
        Ok(Some(quiz)) => {
            info!("Quiz {} active status set to {}", quiz.id, quiz.active);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                quiz,
                "Quiz status updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "Quiz not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update quiz status: {e}"),
            )),
        ),
    }
}
