pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::jobs::requests::{CreateJobRequest, JobListQuery, UpdateJobRequest};
use crate::storage::Storage;

pub struct JobService {
    storage: Option<Arc<dyn Storage>>,
}

impl JobService {
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

    /// 发布职位
    pub async fn create_job(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateJobRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_job(self, request, created_by, req).await
    }

    /// 获取职位详情
    pub async fn get_job(&self, request: &HttpRequest, job_id: i64) -> ActixResult<HttpResponse> {
        get::get_job(self, request, job_id).await
    }

    /// 列出职位
    pub async fn list_jobs(
        &self,
        request: &HttpRequest,
        query: JobListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_jobs(self, request, query).await
    }

    /// 更新职位
    pub async fn update_job(
        &self,
        request: &HttpRequest,
        job_id: i64,
        update: UpdateJobRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_job(self, request, job_id, update).await
    }

    /// 删除职位
    pub async fn delete_job(
        &self,
        request: &HttpRequest,
        job_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_job(self, request, job_id).await
    }
}
