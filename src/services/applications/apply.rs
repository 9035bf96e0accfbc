use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::models::jobs::entities::JobStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 候选人申请职位
/// POST /jobs/{id}/apply
pub async fn apply(
    service: &ApplicationService,
    request: &HttpRequest,
    job_id: i64,
    applicant_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 职位必须存在且处于招聘中
    let job = match storage.get_job_by_id(job_id).await {
        Ok(Some(job)) => job,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::JobNotFound,
                "Job not found",
            )));
        }
        Err(e) => {
            error!("Failed to query job {}: {}", job_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to query job",
                )),
            );
        }
    };

    if job.status != JobStatus::Open {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Job is no longer accepting applications",
        )));
    }

    // 同一职位同一候选人只允许一份申请
    match storage
        .get_application_by_job_and_user(job_id, applicant_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyApplied,
                "You have already applied to this job",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check existing application: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create application",
                )),
            );
        }
    }

    match storage.create_application(job_id, applicant_id).await {
        Ok(application) => {
            info!("User {} applied to job {}", applicant_id, job_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(application, "Application submitted")))
        }
        Err(e) => {
            error!("Failed to create application: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create application",
                )),
            )
        }
    }
}
