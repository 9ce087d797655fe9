use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::errors::Result;
use crate::models::quizzes::responses::{QuizDetailResponse, QuizQuestionDetail};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 组装测验详情：测验本体 + 按卷面顺序的题目与选项
///
/// 判分、作答详情与统计都复用这里的装配逻辑。悬空的题目引用
/// 被跳过而不是报错。
pub(crate) async fn load_quiz_detail(
    storage: &Arc<dyn Storage>,
    quiz_id: i64,
) -> Result<Option<QuizDetailResponse>> {
    let Some(quiz) = storage.get_quiz_by_id(quiz_id).await? else {
        return Ok(None);
    };

    let quiz_questions = storage.list_quiz_questions(quiz_id).await?;
    let mut questions = Vec::with_capacity(quiz_questions.len());
    for quiz_question in &quiz_questions {
        let Some(question) = storage.get_question_by_id(quiz_question.question_id).await? else {
            continue;
        };
        let alternatives = storage.list_alternatives_by_question(question.id).await?;
        questions.push(QuizQuestionDetail {
            question,
            order: quiz_question.order,
            alternatives,
        });
    }

    Ok(Some(QuizDetailResponse { quiz, questions }))
}

pub async fn get_quiz_detail(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_quiz_detail(&storage, quiz_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Quiz detail retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizNotFound,
            "Quiz not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to fetch quiz detail: {e}"),
            )),
        ),
    }
}
