use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireJWT, RequireRole};
use crate::models::evaluations::requests::{SubmissionListParams, SubmitTestRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::EvaluationService;

// 懒加载的全局 EvaluationService 实例
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

// 提交测试并评分
pub async fn submit_test(
    req: HttpRequest,
    body: web::Json<SubmitTestRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Not logged in",
            )));
        }
    };

    EVALUATION_SERVICE
        .submit_test(&req, user_id, body.into_inner())
        .await
}

// 获取提交详情
pub async fn get_submission(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .get_submission(&req, path.into_inner())
        .await
}

// 列出提交（招聘方）
pub async fn list_submissions(
    req: HttpRequest,
    params: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_submissions(&req, params.into_inner().into())
        .await
}

// 配置路由
pub fn configure_evaluations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluations")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/submit")
                    .wrap(RateLimit::submit_test())
                    .route(web::post().to(submit_test)),
            )
            .service(
                web::resource("")
                    .wrap(RequireRole::new_any(UserRole::staff_roles()))
                    .route(web::get().to(list_submissions)),
            )
            .route("/{id}", web::get().to(get_submission)),
    );
}
