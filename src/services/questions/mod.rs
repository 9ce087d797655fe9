pub mod import;
pub mod list;
pub mod seed;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::questions::requests::QuestionQueryParams;
use crate::storage::Storage;

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
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

    // 题库列表，支持按分类过滤
    pub async fn list_questions(
        &self,
        request: &HttpRequest,
        params: QuestionQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_questions(self, request, params).await
    }

    // 某道题的全部选项
    pub async fn list_alternatives(
        &self,
        request: &HttpRequest,
        question_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_alternatives(self, request, question_id).await
    }

    // CSV 批量导入题目
    pub async fn import_questions(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_questions(self, payload, request).await
    }

    // CSV 批量导入选项
    pub async fn import_alternatives(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_alternatives(self, payload, request).await
    }
}
