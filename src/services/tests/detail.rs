use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TestService;
use crate::middlewares::RequireJWT;
use crate::models::tests::responses::TestView;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 获取测试详情
/// GET /tests/{id}
///
/// 招聘方看到完整聚合（含正确答案标记），候选人只看到题面和选项。
pub async fn get_test(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let role = RequireJWT::extract_user_role(request);
    let is_staff = role
        .as_ref()
        .map(|r| UserRole::staff_roles().contains(&r))
        .unwrap_or(false);

    match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => {
            if is_staff {
                Ok(HttpResponse::Ok().json(ApiResponse::success(test, "OK")))
            } else {
                Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(TestView::from_test(test), "OK")))
            }
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "Test not found",
        ))),
        Err(e) => {
            error!("Failed to get test {}: {}", test_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to query test",
                )),
            )
        }
    }
}
