pub mod assemble;
pub mod create;
pub mod detail;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quizzes::requests::{CreateQuizRequest, UpdateQuizStatusRequest};
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建测验并随机组卷
    pub async fn create_quiz(
        &self,
        request: &HttpRequest,
        quiz_data: CreateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_quiz(self, request, quiz_data).await
    }

    // 获取测验详情（含卷面题目与选项）
    pub async fn get_quiz_detail(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_quiz_detail(self, request, quiz_id).await
    }

    // 列出教师创建的测验
    pub async fn list_quizzes_by_instructor(
        &self,
        request: &HttpRequest,
        instructor_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_quizzes_by_instructor(self, request, instructor_id).await
    }

    // 列出班级的测验
    pub async fn list_quizzes_by_turma(
        &self,
        request: &HttpRequest,
        turma: String,
    ) -> ActixResult<HttpResponse> {
        list::list_quizzes_by_turma(self, request, turma).await
    }

    // 更新测验开放状态
    pub async fn set_quiz_active(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        update_data: UpdateQuizStatusRequest,
    ) -> ActixResult<HttpResponse> {
        status::set_quiz_active(self, request, quiz_id, update_data).await
    }
}
