use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::applications::responses::{ApplicationDetailResponse, ApplicationJobInfo};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 获取申请详情（本人或招聘方）
/// GET /applications/{id}
pub async fn get_application(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not logged in",
        )));
    };

    let application = match storage.get_application_by_id(application_id).await {
        Ok(Some(application)) => application,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ApplicationNotFound,
                "Application not found",
            )));
        }
        Err(e) => {
            error!("Failed to query application {}: {}", application_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to query application",
                )),
            );
        }
    };

    // 候选人只能查看自己的申请
    let is_staff = UserRole::staff_roles().contains(&&current_user.role);
    if !is_staff && application.applicant_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "You do not have permission to view this application",
        )));
    }

    let job = match storage.get_job_by_id(application.job_id).await {
        Ok(job) => job.map(|j| ApplicationJobInfo {
            id: j.id,
            title: j.title,
            status: j.status.to_string(),
        }),
        Err(e) => {
            error!("Failed to query job for application: {}", e);
            None
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ApplicationDetailResponse { application, job },
        "OK",
    )))
}
