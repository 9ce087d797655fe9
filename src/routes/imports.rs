use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::QuestionService;

// 懒加载的全局 QUESTION_SERVICE 实例（导入走题库服务）
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

// HTTP处理程序
pub async fn import_questions(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.import_questions(payload, &req).await
}

pub async fn import_alternatives(
    req: HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.import_alternatives(payload, &req).await
}

// 配置路由
pub fn configure_import_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/import")
            .service(web::resource("/questions").route(web::post().to(import_questions)))
            .service(web::resource("/alternatives").route(web::post().to(import_alternatives))),
    );
}
