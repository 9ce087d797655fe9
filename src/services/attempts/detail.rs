use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttemptService;
use super::complete::latest_selection;
use crate::errors::Result;
use crate::models::attempts::responses::{
    AttemptDetailResponse, AttemptQuestionDetail, AttemptQuizDetail,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::quizzes::detail::load_quiz_detail;
use crate::storage::Storage;

/// 组装作答详情：尝试记录 + 卷面 + 每题最新所选选项
pub(crate) async fn load_attempt_detail(
    storage: &Arc<dyn Storage>,
    student_id: i64,
    quiz_id: i64,
) -> Result<Option<AttemptDetailResponse>> {
    let Some(attempt) = storage.get_student_quiz_by_ids(student_id, quiz_id).await? else {
        return Ok(None);
    };
    let Some(quiz_detail) = load_quiz_detail(storage, quiz_id).await? else {
        return Ok(None);
    };

    let responses = storage.list_student_responses(student_id, quiz_id).await?;

    let questions = quiz_detail
        .questions
        .into_iter()
        .map(|detail| {
            let selected_alternative_id = latest_selection(&responses, detail.question.id);
            AttemptQuestionDetail {
                question: detail.question,
                order: detail.order,
                alternatives: detail.alternatives,
                selected_alternative_id,
            }
        })
        .collect();

    Ok(Some(AttemptDetailResponse {
        attempt,
        quiz: AttemptQuizDetail {
            quiz: quiz_detail.quiz,
            questions,
        },
    }))
}

pub async fn get_attempt_detail(
    service: &AttemptService,
    request: &HttpRequest,
    student_id: i64,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_attempt_detail(&storage, student_id, quiz_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Attempt detail retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttemptNotFound,
            "Quiz attempt not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to fetch attempt detail: {e}"),
            )),
        ),
    }
}
