use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::JobService;
use crate::models::jobs::requests::CreateJobRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 发布职位
/// POST /jobs
pub async fn create_job(
    service: &JobService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateJobRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Job title must not be empty",
        )));
    }

    match storage.create_job(created_by, req).await {
        Ok(job) => {
            info!("Job '{}' created by {}", job.title, created_by);
            Ok(HttpResponse::Created().json(ApiResponse::success(job, "Job created")))
        }
        Err(e) => {
            error!("Job creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create job",
                )),
            )
        }
    }
}
