use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::tests::entities::{Question, Test};

/// 候选人视角的选项（不暴露正确答案）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct ChoiceView {
    pub id: i64,
    pub text: String,
}

/// 候选人视角的题目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct QuestionView {
    pub id: i64,
    pub text: String,
    pub position: i32,
    pub choices: Vec<ChoiceView>,
}

/// 候选人视角的测试详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestView {
    pub id: i64,
    pub title: String,
    pub total_score: i64,
    pub questions: Vec<QuestionView>,
}

impl TestView {
    pub fn from_test(test: Test) -> Self {
        Self {
            id: test.id,
            title: test.title,
            total_score: test.total_score,
            questions: test.questions.into_iter().map(QuestionView::from).collect(),
        }
    }
}

impl From<Question> for QuestionView {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            text: question.text,
            position: question.position,
            choices: question
                .choices
                .into_iter()
                .map(|c| ChoiceView {
                    id: c.id,
                    text: c.text,
                })
                .collect(),
        }
    }
}

/// 测试列表项（不含题目）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListItem {
    pub id: i64,
    pub title: String,
    pub total_score: i64,
    pub created_by: i64,
    pub created_at: String,
}

/// 测试列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListResponse {
    pub items: Vec<TestListItem>,
    pub pagination: PaginationInfo,
}

/// 是否已提交检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct SubmittedCheckResponse {
    pub submitted: bool,
}
