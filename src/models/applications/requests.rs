use serde::Deserialize;
use ts_rs::TS;

use crate::models::applications::entities::ApplicationStatus;
use crate::models::common::pagination::PaginationQuery;

/// 更新申请状态请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
}

/// 申请列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub job_id: Option<i64>,
    pub status: Option<ApplicationStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ApplicationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub job_id: Option<i64>,
    pub applicant_id: Option<i64>,
    pub status: Option<ApplicationStatus>,
}

impl ApplicationListQuery {
    pub fn from_params(params: ApplicationListParams, applicant_id: Option<i64>) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            job_id: params.job_id,
            applicant_id,
            status: params.status,
        }
    }
}
