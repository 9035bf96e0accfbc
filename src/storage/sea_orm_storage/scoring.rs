//! 评分引擎
//!
//! 对一批答案做纯内存评分：题目与选项已经通过两次批量查询取回并
//! 建成查找表，这里只做 O(1) 解析和计数，不触达数据库。

use std::collections::HashMap;

use crate::entity::prelude::{ChoiceModel, QuestionModel};
use crate::errors::{JobBoardError, Result};
use crate::models::evaluations::entities::UnresolvedAnswerPolicy;
use crate::models::evaluations::requests::AnswerInput;

/// 通过解析校验的答案
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedAnswer {
    pub question_id: i64,
    pub choice_id: i64,
    pub is_correct: bool,
}

/// 一批答案的评分结果
#[derive(Debug, Clone, Default)]
pub struct ScoredBatch {
    // 正确答案的数量，每题 1 分，无部分得分
    pub total_score: i64,
    pub accepted: Vec<AcceptedAnswer>,
}

/// 对一批答案评分
///
/// 每条答案的题目和选项都通过查找表解析；解析失败的答案按
/// `policy` 处理：`Skip` 时既不计分也不保留，`Reject` 时整批失败。
/// 解析出的选项还必须属于所答的题目，跨题选项视同无法解析。
pub fn score_answers(
    questions: &HashMap<i64, QuestionModel>,
    choices: &HashMap<i64, ChoiceModel>,
    answers: &[AnswerInput],
    policy: UnresolvedAnswerPolicy,
) -> Result<ScoredBatch> {
    let mut batch = ScoredBatch::default();

    for answer in answers {
        let resolved = match (
            questions.get(&answer.question_id),
            choices.get(&answer.choice_id),
        ) {
            (Some(question), Some(choice)) if choice.question_id == question.id => Some(choice),
            _ => None,
        };

        let Some(choice) = resolved else {
            match policy {
                UnresolvedAnswerPolicy::Skip => continue,
                UnresolvedAnswerPolicy::Reject => {
                    return Err(JobBoardError::unresolved_answer(format!(
                        "Answer references unknown question {} or choice {}",
                        answer.question_id, answer.choice_id
                    )));
                }
            }
        };

        if choice.is_correct {
            batch.total_score += 1;
        }
        batch.accepted.push(AcceptedAnswer {
            question_id: answer.question_id,
            choice_id: answer.choice_id,
            is_correct: choice.is_correct,
        });
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64) -> QuestionModel {
        QuestionModel {
            id,
            test_id: 1,
            created_by: 1,
            text: format!("Question {id}"),
            position: id as i32,
        }
    }

    fn choice(id: i64, question_id: i64, is_correct: bool) -> ChoiceModel {
        ChoiceModel {
            id,
            question_id,
            text: format!("Choice {id}"),
            is_correct,
        }
    }

    fn lookup_tables() -> (HashMap<i64, QuestionModel>, HashMap<i64, ChoiceModel>) {
        // 题目 10：选项 100（错误）/ 101（正确）
        // 题目 11：选项 110（正确）/ 111（错误）
        let questions = [question(10), question(11)]
            .into_iter()
            .map(|q| (q.id, q))
            .collect();
        let choices = [
            choice(100, 10, false),
            choice(101, 10, true),
            choice(110, 11, true),
            choice(111, 11, false),
        ]
        .into_iter()
        .map(|c| (c.id, c))
        .collect();
        (questions, choices)
    }

    fn answer(question_id: i64, choice_id: i64) -> AnswerInput {
        AnswerInput {
            question_id,
            choice_id,
        }
    }

    #[test]
    fn test_correct_choice_scores_one() {
        let (questions, choices) = lookup_tables();
        let batch = score_answers(
            &questions,
            &choices,
            &[answer(10, 101)],
            UnresolvedAnswerPolicy::Skip,
        )
        .unwrap();

        assert_eq!(batch.total_score, 1);
        assert_eq!(batch.accepted.len(), 1);
        assert!(batch.accepted[0].is_correct);
    }

    #[test]
    fn test_incorrect_choice_scores_zero_but_is_recorded() {
        let (questions, choices) = lookup_tables();
        let batch = score_answers(
            &questions,
            &choices,
            &[answer(10, 100)],
            UnresolvedAnswerPolicy::Skip,
        )
        .unwrap();

        assert_eq!(batch.total_score, 0);
        assert_eq!(batch.accepted.len(), 1);
        assert!(!batch.accepted[0].is_correct);
    }

    #[test]
    fn test_every_question_contributes_equally() {
        let (questions, choices) = lookup_tables();
        let batch = score_answers(
            &questions,
            &choices,
            &[answer(10, 101), answer(11, 110)],
            UnresolvedAnswerPolicy::Skip,
        )
        .unwrap();

        assert_eq!(batch.total_score, 2);
        assert_eq!(batch.accepted.len(), 2);
    }

    #[test]
    fn test_dangling_question_skipped() {
        let (questions, choices) = lookup_tables();
        let batch = score_answers(
            &questions,
            &choices,
            &[answer(999, 101), answer(11, 110)],
            UnresolvedAnswerPolicy::Skip,
        )
        .unwrap();

        // 悬空引用的答案不计分也不保留，其余答案照常处理
        assert_eq!(batch.total_score, 1);
        assert_eq!(batch.accepted.len(), 1);
        assert_eq!(batch.accepted[0].question_id, 11);
    }

    #[test]
    fn test_dangling_choice_skipped() {
        let (questions, choices) = lookup_tables();
        let batch = score_answers(
            &questions,
            &choices,
            &[answer(10, 9999)],
            UnresolvedAnswerPolicy::Skip,
        )
        .unwrap();

        assert_eq!(batch.total_score, 0);
        assert!(batch.accepted.is_empty());
    }

    #[test]
    fn test_choice_from_another_question_skipped() {
        let (questions, choices) = lookup_tables();
        // 选项 110 存在，但属于题目 11 而不是题目 10
        let batch = score_answers(
            &questions,
            &choices,
            &[answer(10, 110)],
            UnresolvedAnswerPolicy::Skip,
        )
        .unwrap();

        assert_eq!(batch.total_score, 0);
        assert!(batch.accepted.is_empty());
    }

    #[test]
    fn test_reject_policy_fails_whole_batch() {
        let (questions, choices) = lookup_tables();
        let result = score_answers(
            &questions,
            &choices,
            &[answer(10, 101), answer(999, 101)],
            UnresolvedAnswerPolicy::Reject,
        );

        let err = result.unwrap_err();
        assert_eq!(err.code(), "E013");
        assert!(err.message().contains("999"));
    }

    #[test]
    fn test_empty_answer_set() {
        let (questions, choices) = lookup_tables();
        let batch =
            score_answers(&questions, &choices, &[], UnresolvedAnswerPolicy::Reject).unwrap();

        assert_eq!(batch.total_score, 0);
        assert!(batch.accepted.is_empty());
    }
}
