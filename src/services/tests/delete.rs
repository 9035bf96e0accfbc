use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TestService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除测试
/// DELETE /tests/{id}
pub async fn delete_test(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_test(test_id).await {
        Ok(true) => {
            info!("Test {} deleted", test_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Test deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "Test not found",
        ))),
        Err(e) => {
            error!("Failed to delete test {}: {}", test_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete test",
                )),
            )
        }
    }
}
