use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::JobService;
use crate::models::{ApiResponse, ErrorCode};

/// 获取职位详情
/// GET /jobs/{id}
pub async fn get_job(
    service: &JobService,
    request: &HttpRequest,
    job_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_job_by_id(job_id).await {
        Ok(Some(job)) => Ok(HttpResponse::Ok().json(ApiResponse::success(job, "OK"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JobNotFound,
            "Job not found",
        ))),
        Err(e) => {
            error!("Failed to get job {}: {}", job_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to query job",
                )),
            )
        }
    }
}
