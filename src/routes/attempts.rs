use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::attempts::requests::RecordResponseRequest;
use crate::services::AttemptService;
use crate::utils::{SafeQuizIdI64, SafeStudentIdI64};

// 懒加载的全局 ATTEMPT_SERVICE 实例
static ATTEMPT_SERVICE: Lazy<AttemptService> = Lazy::new(AttemptService::new_lazy);

// HTTP处理程序
pub async fn start_attempt(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    quiz_id: SafeQuizIdI64,
) -> ActixResult<HttpResponse> {
    ATTEMPT_SERVICE
        .start_attempt(&req, student_id.0, quiz_id.0)
        .await
}

pub async fn record_response(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    quiz_id: SafeQuizIdI64,
    response_data: web::Json<RecordResponseRequest>,
) -> ActixResult<HttpResponse> {
    ATTEMPT_SERVICE
        .record_response(&req, student_id.0, quiz_id.0, response_data.into_inner())
        .await
}

pub async fn complete_attempt(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    quiz_id: SafeQuizIdI64,
) -> ActixResult<HttpResponse> {
    ATTEMPT_SERVICE
        .complete_attempt(&req, student_id.0, quiz_id.0)
        .await
}

pub async fn get_attempt_detail(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    quiz_id: SafeQuizIdI64,
) -> ActixResult<HttpResponse> {
    ATTEMPT_SERVICE
        .get_attempt_detail(&req, student_id.0, quiz_id.0)
        .await
}

// 配置路由
pub fn configure_attempts_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students/{student_id}/quizzes")
            .service(
                web::resource("/{quiz_id}")
                    .route(web::get().to(get_attempt_detail)),
            )
            .service(web::resource("/{quiz_id}/start").route(web::post().to(start_attempt)))
            .service(web::resource("/{quiz_id}/responses").route(web::post().to(record_response)))
            .service(web::resource("/{quiz_id}/complete").route(web::post().to(complete_attempt))),
    );
}
