use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::models::applications::entities::ApplicationStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 更新申请状态（招聘方）
/// PATCH /applications/{id}/status
pub async fn update_status(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: i64,
    status: ApplicationStatus,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current = match storage.get_application_by_id(application_id).await {
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

    // 状态机校验
    if !current.status.can_transition_to(status) {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            format!(
                "Cannot transition application from '{}' to '{}'",
                current.status, status
            ),
        )));
    }

    match storage
        .update_application_status(application_id, status)
        .await
    {
        Ok(Some(application)) => {
            info!(
                "Application {} moved from '{}' to '{}'",
                application_id, current.status, status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(application, "Status updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        ))),
        Err(e) => {
            error!("Failed to update application {}: {}", application_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update application status",
                )),
            )
        }
    }
}
