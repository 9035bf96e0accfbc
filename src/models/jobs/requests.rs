use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::jobs::entities::JobStatus;

/// 创建职位请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct CreateJobRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default = "default_employment_type")]
    pub employment_type: String,
}

fn default_employment_type() -> String {
    "full_time".to_string()
}

/// 更新职位请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub status: Option<JobStatus>,
}

/// 职位列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct JobListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<JobStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct JobListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub status: Option<JobStatus>,
}

impl From<JobListParams> for JobListQuery {
    fn from(params: JobListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
            status: params.status,
        }
    }
}
