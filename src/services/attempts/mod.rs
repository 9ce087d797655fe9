pub mod complete;
pub mod detail;
pub mod respond;
pub mod start;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attempts::requests::RecordResponseRequest;
use crate::storage::Storage;

pub struct AttemptService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttemptService {
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

    // 开始作答（幂等：已有尝试记录时原样返回）
    pub async fn start_attempt(
        &self,
        request: &HttpRequest,
        student_id: i64,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        start::start_attempt(self, request, student_id, quiz_id).await
    }

    // 提交单题作答（只追加，重复作答产生新记录）
    pub async fn record_response(
        &self,
        request: &HttpRequest,
        student_id: i64,
        quiz_id: i64,
        response_data: RecordResponseRequest,
    ) -> ActixResult<HttpResponse> {
        respond::record_response(self, request, student_id, quiz_id, response_data).await
    }

    // 完成作答并判分
    pub async fn complete_attempt(
        &self,
        request: &HttpRequest,
        student_id: i64,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        complete::complete_attempt(self, request, student_id, quiz_id).await
    }

    // 获取作答详情（卷面 + 每题所选选项）
    pub async fn get_attempt_detail(
        &self,
        request: &HttpRequest,
        student_id: i64,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_attempt_detail(self, request, student_id, quiz_id).await
    }
}
