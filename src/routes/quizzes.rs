use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::quizzes::requests::{CreateQuizRequest, UpdateQuizStatusRequest};
use crate::services::{QuizService, StatisticsService};
use crate::utils::{SafeInstructorIdI64, SafeQuizIdI64};

// 懒加载的全局服务实例
static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);
static STATISTICS_SERVICE: Lazy<StatisticsService> = Lazy::new(StatisticsService::new_lazy);

// HTTP处理程序
pub async fn create_quiz(
    req: HttpRequest,
    quiz_data: web::Json<CreateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.create_quiz(&req, quiz_data.into_inner()).await
}

pub async fn get_quiz_detail(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_quiz_detail(&req, quiz_id.0).await
}

pub async fn get_quiz_statistics(
    req: HttpRequest,
    quiz_id: SafeQuizIdI64,
) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE.get_quiz_statistics(&req, quiz_id.0).await
}

pub async fn set_quiz_active(
    req: HttpRequest,
    quiz_id: SafeQuizIdI64,
    update_data: web::Json<UpdateQuizStatusRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .set_quiz_active(&req, quiz_id.0, update_data.into_inner())
        .await
}

pub async fn list_quizzes_by_instructor(
    req: HttpRequest,
    instructor_id: SafeInstructorIdI64,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .list_quizzes_by_instructor(&req, instructor_id.0)
        .await
}

pub async fn list_quizzes_by_turma(
    req: HttpRequest,
    turma: web::Path<String>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .list_quizzes_by_turma(&req, turma.into_inner())
        .await
}

// 配置路由
pub fn configure_quizzes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quizzes")
            .service(web::resource("").route(web::post().to(create_quiz)))
            .service(web::resource("/{quiz_id}").route(web::get().to(get_quiz_detail)))
            .service(
                web::resource("/{quiz_id}/statistics").route(web::get().to(get_quiz_statistics)),
            )
            .service(web::resource("/{quiz_id}/status").route(web::patch().to(set_quiz_active))),
    );
    cfg.service(
        web::scope("/api/v1/instructors").service(
            web::resource("/{instructor_id}/quizzes")
                .route(web::get().to(list_quizzes_by_instructor)),
        ),
    );
    cfg.service(
        web::scope("/api/v1/turmas")
            .service(web::resource("/{turma}/quizzes").route(web::get().to(list_quizzes_by_turma))),
    );
}
