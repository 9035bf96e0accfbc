use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::applications::entities::{ApplicationStatus, JobApplication};

/// 申请人信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicantInfo {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

/// 申请关联的职位信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationJobInfo {
    pub id: i64,
    pub title: String,
    pub status: String,
}

/// 申请列表项（包含申请人与职位信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationListItem {
    pub id: i64,
    pub job: ApplicationJobInfo,
    pub applicant: ApplicantInfo,
    pub status: ApplicationStatus,
    pub submission_id: Option<i64>,
    pub applied_at: String,
}

/// 申请列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationListResponse {
    pub items: Vec<ApplicationListItem>,
    pub pagination: PaginationInfo,
}

/// 申请详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub application: JobApplication,
    pub job: Option<ApplicationJobInfo>,
}
