use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::jobs::requests::{CreateJobRequest, JobListParams, UpdateJobRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{ApplicationService, JobService};

// 懒加载的全局服务实例
static JOB_SERVICE: Lazy<JobService> = Lazy::new(JobService::new_lazy);
static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

// 列出职位
pub async fn list_jobs(
    req: HttpRequest,
    params: web::Query<JobListParams>,
) -> ActixResult<HttpResponse> {
    JOB_SERVICE.list_jobs(&req, params.into_inner().into()).await
}

// 发布职位
pub async fn create_job(
    req: HttpRequest,
    body: web::Json<CreateJobRequest>,
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

    JOB_SERVICE.create_job(&req, user_id, body.into_inner()).await
}

// 获取职位详情
pub async fn get_job(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    JOB_SERVICE.get_job(&req, path.into_inner()).await
}

// 更新职位
pub async fn update_job(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateJobRequest>,
) -> ActixResult<HttpResponse> {
    JOB_SERVICE
        .update_job(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除职位
pub async fn delete_job(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    JOB_SERVICE.delete_job(&req, path.into_inner()).await
}

// 候选人申请职位
pub async fn apply_to_job(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Not logged in",
            )));
        }
    };

    APPLICATION_SERVICE
        .apply(&req, path.into_inner(), user_id)
        .await
}

// 配置路由
pub fn configure_jobs_routes(cfg: &mut web::ServiceConfig) {
    // 浏览与申请：任何已登录用户
    cfg.service(
        web::scope("/api/v1/jobs")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_jobs))
            .route("/{id}", web::get().to(get_job))
            .route("/{id}/apply", web::post().to(apply_to_job)),
    );

    // 职位管理：招聘方
    cfg.service(
        web::scope("/api/v1/admin/jobs")
            .wrap(RequireRole::new_any(UserRole::staff_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_job))
            .route("/{id}", web::put().to(update_job))
            .route("/{id}", web::delete().to(delete_job)),
    );
}
