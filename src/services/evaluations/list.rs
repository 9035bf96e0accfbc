use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::models::evaluations::requests::SubmissionListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 分页列出提交（招聘方）
/// GET /evaluations
pub async fn list_submissions(
    service: &EvaluationService,
    request: &HttpRequest,
    query: SubmissionListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_submissions_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list submissions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list submissions",
                )),
            )
        }
    }
}
