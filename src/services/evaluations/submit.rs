use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EvaluationService;
use crate::errors::JobBoardError;
use crate::models::evaluations::entities::UnresolvedAnswerPolicy;
use crate::models::evaluations::requests::SubmitTestRequest;
use crate::models::evaluations::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 提交测试并评分
/// POST /evaluations/submit
///
/// 完整流水线在存储层的一个事务内完成；这里只做入参检查和错误翻译。
/// 悬空答案按默认策略静默丢弃（SkipUnresolved）。
pub async fn submit_test(
    service: &EvaluationService,
    request: &HttpRequest,
    user_id: i64,
    req: SubmitTestRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .submit_test(user_id, req, UnresolvedAnswerPolicy::Skip)
        .await
    {
        Ok(submission) => {
            info!(
                "User {} submitted test {} with score {}",
                user_id, submission.test_id, submission.total_score
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SubmissionResponse { submission },
                "Submission scored",
            )))
        }
        Err(e) => Ok(handle_submit_error(&e)),
    }
}

/// 错误翻译：缺失实体 -> 404（标明是哪个实体），策略拒绝 -> 422，其余 -> 500
fn handle_submit_error(e: &JobBoardError) -> HttpResponse {
    let message = e.message().to_string();
    match e {
        JobBoardError::NotFound(_) => {
            let code = if message.starts_with("Test") {
                ErrorCode::TestNotFound
            } else if message.starts_with("User") {
                ErrorCode::UserNotFound
            } else if message.starts_with("Job application") {
                ErrorCode::ApplicationNotFound
            } else {
                ErrorCode::NotFound
            };
            HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
        }
        JobBoardError::UnresolvedAnswer(_) => HttpResponse::UnprocessableEntity().json(
            ApiResponse::error_empty(ErrorCode::UnresolvedAnswer, message),
        ),
        _ => {
            error!("Test submission failed: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to submit test",
            ))
        }
    }
}
