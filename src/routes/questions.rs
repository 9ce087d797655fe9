use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::questions::requests::QuestionQueryParams;
use crate::services::QuestionService;
use crate::utils::SafeQuestionIdI64;

// 懒加载的全局 QUESTION_SERVICE 实例
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

// HTTP处理程序
pub async fn list_questions(
    req: HttpRequest,
    query: web::Query<QuestionQueryParams>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .list_questions(&req, query.into_inner())
        .await
}

pub async fn list_alternatives(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.list_alternatives(&req, question_id.0).await
}

// 配置路由
pub fn configure_questions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/questions")
            .service(web::resource("").route(web::get().to(list_questions)))
            .service(
                web::resource("/{question_id}/alternatives")
                    .route(web::get().to(list_alternatives)),
            ),
    );
}
