use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::models::tests::responses::SubmittedCheckResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 读侧检查：当前用户是否已提交过某测试
/// GET /tests/{id}/submitted
///
/// 仅供前端预检使用；提交路径本身不做唯一性约束。
pub async fn check_submitted(
    service: &EvaluationService,
    request: &HttpRequest,
    test_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.has_submitted(test_id, user_id).await {
        Ok(submitted) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmittedCheckResponse { submitted },
            "OK",
        ))),
        Err(e) => {
            error!("Failed to check submission state: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to check submission state",
                )),
            )
        }
    }
}
