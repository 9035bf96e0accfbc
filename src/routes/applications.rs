use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::applications::requests::{
    ApplicationListParams, ApplicationListQuery, UpdateApplicationStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ApplicationService;

// 懒加载的全局 ApplicationService 实例
static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

// 列出申请：招聘方不限制，候选人只看自己的
pub async fn list_applications(
    req: HttpRequest,
    params: web::Query<ApplicationListParams>,
) -> ActixResult<HttpResponse> {
    let user = match RequireJWT::extract_user_claims(&req) {
        Some(u) => u,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Not logged in",
            )));
        }
    };

    let is_staff = UserRole::staff_roles().contains(&&user.role);
    let applicant_id = if is_staff { None } else { Some(user.id) };
    let query = ApplicationListQuery::from_params(params.into_inner(), applicant_id);

    APPLICATION_SERVICE.list_applications(&req, query).await
}

// 获取申请详情
pub async fn get_application(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .get_application(&req, path.into_inner())
        .await
}

// 更新申请状态（招聘方）
pub async fn update_application_status(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateApplicationStatusRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .update_status(&req, path.into_inner(), body.into_inner().status)
        .await
}

// 配置路由
pub fn configure_applications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/applications")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_applications))
            .route("/{id}", web::get().to(get_application))
            .service(
                web::resource("/{id}/status")
                    .wrap(RequireRole::new_any(UserRole::staff_roles()))
                    .route(web::patch().to(update_application_status)),
            ),
    );
}
