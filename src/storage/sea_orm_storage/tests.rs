//! 筛选测试存储操作
//!
//! 试卷聚合（测试 + 题目 + 选项）没有任何 ORM 级联行为：
//! 创建时按依赖顺序显式批量写入，删除依赖数据库外键级联。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::choices::{ActiveModel as ChoiceActiveModel, Column as ChoiceColumn, Entity as Choices};
use crate::entity::questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as Questions,
};
use crate::entity::tests::{ActiveModel, Column, Entity as Tests};
use crate::errors::{JobBoardError, Result};
use crate::models::{
    PaginationInfo,
    tests::{
        entities::{Choice, Question, Test},
        requests::{CreateTestRequest, TestListQuery},
        responses::{TestListItem, TestListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建测试（整个聚合一次性批量写入）
    pub async fn create_test_impl(&self, created_by: i64, req: CreateTestRequest) -> Result<Test> {
        let now = chrono::Utc::now().timestamp();
        // 每题 1 分，满分即题目数
        let total_score = req.questions.len() as i64;

        let txn = self.db.begin().await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let test = ActiveModel {
            title: Set(req.title.clone()),
            total_score: Set(total_score),
            created_by: Set(created_by),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| JobBoardError::database_operation(format!("Failed to insert test: {e}")))?;

        // 题目逐条插入换取生成的 ID，选项统一批量插入
        let mut choice_rows = Vec::new();
        for (index, question_req) in req.questions.into_iter().enumerate() {
            let question = QuestionActiveModel {
                test_id: Set(test.id),
                created_by: Set(created_by),
                text: Set(question_req.text),
                position: Set(index as i32 + 1),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to insert question: {e}"))
            })?;

            for choice_req in question_req.choices {
                choice_rows.push(ChoiceActiveModel {
                    question_id: Set(question.id),
                    text: Set(choice_req.text),
                    is_correct: Set(choice_req.is_correct),
                    ..Default::default()
                });
            }
        }

        if !choice_rows.is_empty() {
            Choices::insert_many(choice_rows)
                .exec(&txn)
                .await
                .map_err(|e| {
                    JobBoardError::database_operation(format!("Failed to insert choices: {e}"))
                })?;
        }

        txn.commit().await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to commit test aggregate: {e}"))
        })?;

        self.get_test_by_id_impl(test.id)
            .await?
            .ok_or_else(|| JobBoardError::not_found(format!("Test {} not found", test.id)))
    }

    /// 获取测试详情（含题目与选项）
    pub async fn get_test_by_id_impl(&self, test_id: i64) -> Result<Option<Test>> {
        let result = Tests::find_by_id(test_id)
            .one(&self.db)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to query test: {e}")))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let questions = Questions::find()
            .filter(QuestionColumn::TestId.eq(model.id))
            .order_by_asc(QuestionColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to query questions: {e}"))
            })?;

        let question_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
        let choices = Choices::find()
            .filter(ChoiceColumn::QuestionId.is_in(question_ids))
            .order_by_asc(ChoiceColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to query choices: {e}"))
            })?;

        // 按题目聚合选项
        let mut choices_by_question: HashMap<i64, Vec<Choice>> = HashMap::new();
        for c in choices {
            choices_by_question
                .entry(c.question_id)
                .or_default()
                .push(Choice {
                    id: c.id,
                    question_id: c.question_id,
                    text: c.text,
                    is_correct: c.is_correct,
                });
        }

        let mut test = model.into_test();
        test.questions = questions
            .into_iter()
            .map(|q| Question {
                id: q.id,
                test_id: q.test_id,
                text: q.text,
                position: q.position,
                choices: choices_by_question.remove(&q.id).unwrap_or_default(),
            })
            .collect();

        Ok(Some(test))
    }

    /// 分页列出测试
    pub async fn list_tests_with_pagination_impl(
        &self,
        query: TestListQuery,
    ) -> Result<TestListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Tests::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to count tests: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to count test pages: {e}"))
        })?;

        let tests = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to list tests: {e}")))?;

        let items = tests
            .into_iter()
            .map(|t| TestListItem {
                id: t.id,
                title: t.title,
                total_score: t.total_score,
                created_by: t.created_by,
                created_at: chrono::DateTime::from_timestamp(t.created_at, 0)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_default(),
            })
            .collect();

        Ok(TestListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除测试（题目与选项由外键级联删除）
    pub async fn delete_test_impl(&self, test_id: i64) -> Result<bool> {
        let result = Tests::delete_by_id(test_id)
            .exec(&self.db)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to delete test: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::users::ActiveModel as UserActiveModel;
    use crate::models::tests::requests::{CreateChoiceRequest, CreateQuestionRequest};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    async fn setup_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt)
            .await
            .expect("Failed to connect to in-memory SQLite");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        let storage = SeaOrmStorage { db };

        UserActiveModel {
            id: Set(1),
            username: Set("test-author".to_string()),
            email: Set("author@example.com".to_string()),
            password_hash: Set("not-a-real-hash".to_string()),
            role: Set("staff".to_string()),
            status: Set("active".to_string()),
            display_name: Set(None),
            last_login: Set(None),
            created_at: Set(1_700_000_000),
            updated_at: Set(1_700_000_000),
        }
        .insert(&storage.db)
        .await
        .expect("Failed to seed author");

        storage
    }

    fn aggregate_request() -> CreateTestRequest {
        CreateTestRequest {
            title: "Rust basics".to_string(),
            questions: vec![
                CreateQuestionRequest {
                    text: "What does Rc stand for?".to_string(),
                    choices: vec![
                        CreateChoiceRequest {
                            text: "Reference counted".to_string(),
                            is_correct: true,
                        },
                        CreateChoiceRequest {
                            text: "Runtime check".to_string(),
                            is_correct: false,
                        },
                    ],
                },
                CreateQuestionRequest {
                    text: "Which keyword moves ownership?".to_string(),
                    choices: vec![
                        CreateChoiceRequest {
                            text: "move".to_string(),
                            is_correct: true,
                        },
                        CreateChoiceRequest {
                            text: "copy".to_string(),
                            is_correct: false,
                        },
                    ],
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_create_aggregate_and_fetch() {
        let storage = setup_storage().await;

        let created = storage.create_test_impl(1, aggregate_request()).await.unwrap();

        assert_eq!(created.total_score, 2);
        assert_eq!(created.questions.len(), 2);
        assert_eq!(created.questions[0].position, 1);
        assert_eq!(created.questions[1].position, 2);
        assert_eq!(created.questions[0].choices.len(), 2);
        assert!(created.questions[0].choices.iter().any(|c| c.is_correct));

        let fetched = storage
            .get_test_by_id_impl(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.title, "Rust basics");
        assert_eq!(fetched.questions.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let storage = setup_storage().await;
        let created = storage.create_test_impl(1, aggregate_request()).await.unwrap();

        assert!(storage.delete_test_impl(created.id).await.unwrap());
        assert!(storage.get_test_by_id_impl(created.id).await.unwrap().is_none());

        let orphan_questions = Questions::find().count(&storage.db).await.unwrap();
        let orphan_choices = Choices::find().count(&storage.db).await.unwrap();
        assert_eq!(orphan_questions, 0);
        assert_eq!(orphan_choices, 0);
    }

    #[tokio::test]
    async fn test_list_with_search() {
        let storage = setup_storage().await;
        storage.create_test_impl(1, aggregate_request()).await.unwrap();

        let all = storage
            .list_tests_with_pagination_impl(TestListQuery {
                page: Some(1),
                size: Some(10),
                search: None,
            })
            .await
            .unwrap();
        assert_eq!(all.items.len(), 1);
        assert_eq!(all.pagination.total, 1);

        let none = storage
            .list_tests_with_pagination_impl(TestListQuery {
                page: Some(1),
                size: Some(10),
                search: Some("nonexistent".to_string()),
            })
            .await
            .unwrap();
        assert!(none.items.is_empty());
    }
}
