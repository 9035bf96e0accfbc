use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::JobService;
use crate::models::jobs::requests::JobListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 分页列出职位
/// GET /jobs
pub async fn list_jobs(
    service: &JobService,
    request: &HttpRequest,
    query: JobListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_jobs_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list jobs: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list jobs",
                )),
            )
        }
    }
}
