use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::JobService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除职位
/// DELETE /jobs/{id}
pub async fn delete_job(
    service: &JobService,
    request: &HttpRequest,
    job_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_job(job_id).await {
        Ok(true) => {
            info!("Job {} deleted", job_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Job deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JobNotFound,
            "Job not found",
        ))),
        Err(e) => {
            error!("Failed to delete job {}: {}", job_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete job",
                )),
            )
        }
    }
}
