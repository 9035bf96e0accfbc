use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::JobService;
use crate::models::jobs::requests::UpdateJobRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新职位
/// PUT /jobs/{id}
pub async fn update_job(
    service: &JobService,
    request: &HttpRequest,
    job_id: i64,
    update: UpdateJobRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref title) = update.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Job title must not be empty",
        )));
    }

    match storage.update_job(job_id, update).await {
        Ok(Some(job)) => {
            info!("Job {} updated", job_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(job, "Job updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JobNotFound,
            "Job not found",
        ))),
        Err(e) => {
            error!("Failed to update job {}: {}", job_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update job",
                )),
            )
        }
    }
}
