pub mod detail;
pub mod list;
pub mod submit;
pub mod submitted;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::{SubmissionListQuery, SubmitTestRequest};
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
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

    /// 提交测试并评分
    pub async fn submit_test(
        &self,
        request: &HttpRequest,
        user_id: i64,
        req: SubmitTestRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_test(self, request, user_id, req).await
    }

    /// 获取提交详情
    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission(self, request, submission_id).await
    }

    /// 列出提交
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        query: SubmissionListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, query).await
    }

    /// 读侧检查：当前用户是否已提交过某测试
    pub async fn check_submitted(
        &self,
        request: &HttpRequest,
        test_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        submitted::check_submitted(self, request, test_id, user_id).await
    }
}
