use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 筛选测试实体（含题目聚合）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct Test {
    pub id: i64,
    pub title: String,
    // 满分（题目数，每题 1 分）
    pub total_score: i64,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub questions: Vec<Question>,
}

// 题目实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct Question {
    pub id: i64,
    pub test_id: i64,
    pub text: String,
    pub position: i32,
    pub choices: Vec<Choice>,
}

// 选项实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}
