use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::middlewares::RequireJWT;
use crate::models::evaluations::responses::SubmissionResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 获取提交详情（本人或招聘方）
/// GET /evaluations/{id}
pub async fn get_submission(
    service: &EvaluationService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Not logged in",
        )));
    };

    match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => {
            let is_staff = UserRole::staff_roles().contains(&&current_user.role);
            if !is_staff && submission.user_id != current_user.id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::PermissionDenied,
                    "You do not have permission to view this submission",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse { submission },
                "OK",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => {
            error!("Failed to get submission {}: {}", submission_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to query submission",
                )),
            )
        }
    }
}
