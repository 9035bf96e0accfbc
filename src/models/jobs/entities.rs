use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 职位状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub enum JobStatus {
    Open,   // 招聘中
    Closed, // 已关闭
}

impl<'de> Deserialize<'de> for JobStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid job status: '{s}'. Supported statuses: open, closed"
            ))),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Open => write!(f, "open"),
            JobStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            _ => Err(format!("Invalid job status: {s}")),
        }
    }
}

// 职位实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/job.ts")]
pub struct Job {
    pub id: i64,
    // 职位标题
    pub title: String,
    // 职位描述
    pub description: Option<String>,
    // 工作地点
    pub location: Option<String>,
    // 用工形式（full_time / part_time / contract / internship）
    pub employment_type: String,
    pub status: JobStatus,
    // 发布者 ID
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
