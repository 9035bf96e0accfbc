use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TestService;
use crate::models::tests::requests::CreateTestRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建测试
/// POST /tests
///
/// 创建时即校验聚合不变量：每道题至少两个选项且恰好一个正确答案。
pub async fn create_test(
    service: &TestService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateTestRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = req.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, msg)));
    }

    match storage.create_test(created_by, req).await {
        Ok(test) => {
            info!(
                "Test '{}' created by {} with {} questions",
                test.title,
                created_by,
                test.questions.len()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(test, "Test created")))
        }
        Err(e) => {
            error!("Test creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create test",
                )),
            )
        }
    }
}
