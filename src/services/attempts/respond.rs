use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttemptService;
use crate::models::attempts::requests::{CreateStudentResponseRequest, RecordResponseRequest};
use crate::models::{ApiResponse, ErrorCode};

/// 记录一次作答
///
/// 不校验题目是否属于该测验卷面、选项是否属于该题——这些校验
/// 延迟到判分时进行。重复作答同一题会追加新记录，判分取最新。
pub async fn record_response(
    service: &AttemptService,
    request: &HttpRequest,
    student_id: i64,
    quiz_id: i64,
    response_data: RecordResponseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let create_req = CreateStudentResponseRequest {
        student_id,
        quiz_id,
        question_id: response_data.question_id,
        alternative_id: Some(response_data.alternative_id),
    };

    match storage.create_student_response(create_req).await {
        Ok(response) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(response, "Response recorded")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to record response: {e}"),
            )),
        ),
    }
}
