use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::models::applications::requests::ApplicationListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 分页列出申请
/// GET /applications
///
/// 路由层已经根据角色决定 query.applicant_id：招聘方不限制，候选人固定为本人。
pub async fn list_applications(
    service: &ApplicationService,
    request: &HttpRequest,
    query: ApplicationListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_applications_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list applications: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list applications",
                )),
            )
        }
    }
}
