pub mod apply;
pub mod get;
pub mod list;
pub mod update_status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::applications::entities::ApplicationStatus;
use crate::models::applications::requests::ApplicationListQuery;
use crate::storage::Storage;

pub struct ApplicationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ApplicationService {
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

    /// 候选人申请职位
    pub async fn apply(
        &self,
        request: &HttpRequest,
        job_id: i64,
        applicant_id: i64,
    ) -> ActixResult<HttpResponse> {
        apply::apply(self, request, job_id, applicant_id).await
    }

    /// 获取申请详情
    pub async fn get_application(
        &self,
        request: &HttpRequest,
        application_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_application(self, request, application_id).await
    }

    /// 列出申请
    pub async fn list_applications(
        &self,
        request: &HttpRequest,
        query: ApplicationListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_applications(self, request, query).await
    }

    /// 更新申请状态
    pub async fn update_status(
        &self,
        request: &HttpRequest,
        application_id: i64,
        status: ApplicationStatus,
    ) -> ActixResult<HttpResponse> {
        update_status::update_status(self, request, application_id, status).await
    }
}
