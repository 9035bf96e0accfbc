use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::evaluations::entities::Submission;

/// 提交列表项（不含答案）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmissionListItem {
    pub id: i64,
    pub test_id: i64,
    pub user_id: i64,
    pub total_score: i64,
    pub submitted_at: String,
}

/// 提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
    pub pagination: PaginationInfo,
}

/// 提交详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmissionResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
}
