use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::jobs::entities::Job;

/// 职位列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct JobListResponse {
    pub items: Vec<Job>,
    pub pagination: PaginationInfo,
}
