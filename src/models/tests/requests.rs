use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

/// 创建测试请求（整份试卷一次性提交）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateTestRequest {
    pub title: String,
    pub questions: Vec<CreateQuestionRequest>,
}

/// 创建题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateQuestionRequest {
    pub text: String,
    pub choices: Vec<CreateChoiceRequest>,
}

/// 创建选项请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateChoiceRequest {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl CreateTestRequest {
    /// 校验试卷聚合：非空标题、至少一道题，
    /// 每道题至少两个选项且恰好一个正确答案。
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Test title must not be empty".to_string());
        }
        if self.questions.is_empty() {
            return Err("Test must contain at least one question".to_string());
        }
        for (index, question) in self.questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(format!("Question {} has an empty text", index + 1));
            }
            if question.choices.len() < 2 {
                return Err(format!(
                    "Question {} must have at least two choices",
                    index + 1
                ));
            }
            let correct_count = question.choices.iter().filter(|c| c.is_correct).count();
            if correct_count != 1 {
                return Err(format!(
                    "Question {} must have exactly one correct choice, found {}",
                    index + 1,
                    correct_count
                ));
            }
        }
        Ok(())
    }
}

/// 测试列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct TestListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

impl From<TestListParams> for TestListQuery {
    fn from(params: TestListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(text: &str, is_correct: bool) -> CreateChoiceRequest {
        CreateChoiceRequest {
            text: text.to_string(),
            is_correct,
        }
    }

    fn valid_request() -> CreateTestRequest {
        CreateTestRequest {
            title: "Backend screening".to_string(),
            questions: vec![CreateQuestionRequest {
                text: "What does ACID stand for?".to_string(),
                choices: vec![
                    choice("Atomicity, Consistency, Isolation, Durability", true),
                    choice("Availability, Consistency, Integrity, Durability", false),
                ],
            }],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut req = valid_request();
        req.title = "  ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_no_correct_choice_rejected() {
        let mut req = valid_request();
        req.questions[0].choices[0].is_correct = false;
        let err = req.validate().unwrap_err();
        assert!(err.contains("exactly one correct choice"));
    }

    #[test]
    fn test_multiple_correct_choices_rejected() {
        let mut req = valid_request();
        req.questions[0].choices[1].is_correct = true;
        let err = req.validate().unwrap_err();
        assert!(err.contains("found 2"));
    }

    #[test]
    fn test_single_choice_rejected() {
        let mut req = valid_request();
        req.questions[0].choices.truncate(1);
        assert!(req.validate().is_err());
    }
}
