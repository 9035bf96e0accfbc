use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 无法解析的答案处理策略
///
/// `Skip`：悬空的题目/选项引用被静默丢弃，不计分也不入库。
/// `Reject`：任何一条无法解析的答案使整次提交失败。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub enum UnresolvedAnswerPolicy {
    #[default]
    Skip,
    Reject,
}

// 提交实体（含答案聚合）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Submission {
    pub id: i64,
    pub test_id: i64,
    pub user_id: i64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 正确答案的数量，每题 1 分，无部分得分
    pub total_score: i64,
    pub answers: Vec<Answer>,
}

// 答案实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Answer {
    pub id: i64,
    pub submission_id: i64,
    pub question_id: i64,
    pub choice_id: i64,
}
