use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::tests::requests::{CreateTestRequest, TestListParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{EvaluationService, TestService};

// 懒加载的全局服务实例
static TEST_SERVICE: Lazy<TestService> = Lazy::new(TestService::new_lazy);
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

// 列出测试
pub async fn list_tests(
    req: HttpRequest,
    params: web::Query<TestListParams>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .list_tests(&req, params.into_inner().into())
        .await
}

// 创建测试
pub async fn create_test(
    req: HttpRequest,
    body: web::Json<CreateTestRequest>,
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

    TEST_SERVICE
        .create_test(&req, user_id, body.into_inner())
        .await
}

// 获取测试详情
pub async fn get_test(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    TEST_SERVICE.get_test(&req, path.into_inner()).await
}

// 删除测试
pub async fn delete_test(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    TEST_SERVICE.delete_test(&req, path.into_inner()).await
}

// 检查当前用户是否已提交过该测试
pub async fn check_submitted(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
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
        .check_submitted(&req, path.into_inner(), user_id)
        .await
}

// 配置路由
pub fn configure_tests_routes(cfg: &mut web::ServiceConfig) {
    // 查看测试：任何已登录用户（候选人视角不含答案）
    cfg.service(
        web::scope("/api/v1/tests")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_tests))
            .route("/{id}", web::get().to(get_test))
            .route("/{id}/submitted", web::get().to(check_submitted)),
    );

    // 测试管理：招聘方
    cfg.service(
        web::scope("/api/v1/admin/tests")
            .wrap(RequireRole::new_any(UserRole::staff_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_test))
            .route("/{id}", web::delete().to(delete_test)),
    );
}
