//! 提交与评分存储操作
//!
//! submit_test 的完整流水线：并发实体查找 -> 两次批量查询建查找表 ->
//! 纯内存评分 -> 单事务写入（提交 + 答案 + 申请结果指针）。

use std::collections::{HashMap, HashSet};

use futures_util::try_join;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::SeaOrmStorage;
use super::scoring::{self, ScoredBatch};
use crate::entity::answers::{
    ActiveModel as AnswerActiveModel, Column as AnswerColumn, Entity as Answers,
};
use crate::entity::choices::{Column as ChoiceColumn, Entity as Choices};
use crate::entity::job_applications::{Column as JobApplicationColumn, Entity as JobApplications};
use crate::entity::prelude::{AnswerModel, SubmissionModel};
use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};
use crate::entity::submissions::{
    ActiveModel as SubmissionActiveModel, Column, Entity as Submissions,
};
use crate::entity::tests::Entity as Tests;
use crate::entity::users::Entity as Users;
use crate::errors::{JobBoardError, Result};
use crate::models::{
    PaginationInfo,
    evaluations::{
        entities::{Answer, Submission, UnresolvedAnswerPolicy},
        requests::{SubmissionListQuery, SubmitTestRequest},
        responses::{SubmissionListItem, SubmissionListResponse},
    },
};

/// 在同一个连接（通常是事务）内持久化一次评分结果
///
/// 工作单元作为参数传入：提交插入、答案批量插入和申请结果指针更新
/// 共用同一个 `conn`，调用方决定提交或回滚。申请更新必须恰好命中一行，
/// 否则返回错误让调用方回滚整个单元。
pub(crate) async fn persist_submission<C>(
    conn: &C,
    test_id: i64,
    user_id: i64,
    job_application_id: i64,
    submitted_at: i64,
    batch: &ScoredBatch,
) -> Result<(SubmissionModel, Vec<AnswerModel>)>
where
    C: ConnectionTrait,
{
    let submission = SubmissionActiveModel {
        test_id: Set(test_id),
        user_id: Set(user_id),
        submitted_at: Set(submitted_at),
        total_score: Set(batch.total_score),
        ..Default::default()
    }
    .insert(conn)
    .await
    .map_err(|e| JobBoardError::database_operation(format!("Failed to insert submission: {e}")))?;

    if !batch.accepted.is_empty() {
        let rows = batch.accepted.iter().map(|a| AnswerActiveModel {
            submission_id: Set(submission.id),
            question_id: Set(a.question_id),
            choice_id: Set(a.choice_id),
            ..Default::default()
        });

        Answers::insert_many(rows)
            .exec(conn)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to insert answers: {e}"))
            })?;
    }

    let update = JobApplications::update_many()
        .col_expr(
            JobApplicationColumn::SubmissionId,
            sea_orm::sea_query::Expr::value(submission.id),
        )
        .col_expr(
            JobApplicationColumn::UpdatedAt,
            sea_orm::sea_query::Expr::value(submitted_at),
        )
        .filter(JobApplicationColumn::Id.eq(job_application_id))
        .exec(conn)
        .await
        .map_err(|e| {
            JobBoardError::database_operation(format!("Failed to update job application: {e}"))
        })?;

    if update.rows_affected != 1 {
        return Err(JobBoardError::not_found(format!(
            "Job application {job_application_id} not found"
        )));
    }

    let answers = Answers::find()
        .filter(AnswerColumn::SubmissionId.eq(submission.id))
        .order_by_asc(AnswerColumn::Id)
        .all(conn)
        .await
        .map_err(|e| {
            JobBoardError::database_operation(format!("Failed to read back answers: {e}"))
        })?;

    Ok((submission, answers))
}

fn assemble_submission(model: SubmissionModel, answers: Vec<AnswerModel>) -> Submission {
    let mut submission = model.into_submission();
    submission.answers = answers
        .into_iter()
        .map(|a| Answer {
            id: a.id,
            submission_id: a.submission_id,
            question_id: a.question_id,
            choice_id: a.choice_id,
        })
        .collect();
    submission
}

impl SeaOrmStorage {
    /// 提交测试并评分
    pub async fn submit_test_impl(
        &self,
        user_id: i64,
        req: SubmitTestRequest,
        policy: UnresolvedAnswerPolicy,
    ) -> Result<Submission> {
        // 三个实体相互独立，并发查找；任何一个缺失都在写入前失败
        let (test, user, application) = try_join!(
            Tests::find_by_id(req.test_id).one(&self.db),
            Users::find_by_id(user_id).one(&self.db),
            JobApplications::find_by_id(req.job_application_id).one(&self.db),
        )
        .map_err(|e| JobBoardError::database_operation(format!("Entity lookup failed: {e}")))?;

        let test = test.ok_or_else(|| {
            JobBoardError::not_found(format!("Test {} not found", req.test_id))
        })?;
        let user = user
            .ok_or_else(|| JobBoardError::not_found(format!("User {user_id} not found")))?;
        let application = application.ok_or_else(|| {
            JobBoardError::not_found(format!(
                "Job application {} not found",
                req.job_application_id
            ))
        })?;

        // 答案数量无关：固定两次批量查询，避免每条答案一次往返
        let question_ids: Vec<i64> = req
            .answers
            .iter()
            .map(|a| a.question_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let choice_ids: Vec<i64> = req
            .answers
            .iter()
            .map(|a| a.choice_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let (questions, choices) = try_join!(
            Questions::find()
                .filter(QuestionColumn::Id.is_in(question_ids))
                .all(&self.db),
            Choices::find()
                .filter(ChoiceColumn::Id.is_in(choice_ids))
                .all(&self.db),
        )
        .map_err(|e| {
            JobBoardError::database_operation(format!("Bulk answer lookup failed: {e}"))
        })?;

        let question_map: HashMap<i64, _> = questions.into_iter().map(|q| (q.id, q)).collect();
        let choice_map: HashMap<i64, _> = choices.into_iter().map(|c| (c.id, c)).collect();

        let batch = scoring::score_answers(&question_map, &choice_map, &req.answers, policy)?;

        let now = chrono::Utc::now().timestamp();

        // 显式事务作为工作单元：提交、答案和申请指针要么全部落库要么全部回滚
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to open transaction: {e}"))
            })?;

        match persist_submission(&txn, test.id, user.id, application.id, now, &batch).await {
            Ok((submission, answers)) => {
                txn.commit().await.map_err(|e| {
                    JobBoardError::database_operation(format!("Failed to commit submission: {e}"))
                })?;
                Ok(assemble_submission(submission, answers))
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    /// 通过 ID 获取提交（含答案）
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to query submission: {e}"))
            })?;

        let Some(model) = result else {
            return Ok(None);
        };

        let answers = Answers::find()
            .filter(AnswerColumn::SubmissionId.eq(model.id))
            .order_by_asc(AnswerColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to query answers: {e}"))
            })?;

        Ok(Some(assemble_submission(model, answers)))
    }

    /// 列出提交（分页）
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Submissions::find();

        // 测试筛选
        if let Some(test_id) = query.test_id {
            select = select.filter(Column::TestId.eq(test_id));
        }

        // 提交者筛选
        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        // 排序
        select = select.order_by_desc(Column::SubmittedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to count submissions: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to count submission pages: {e}"))
        })?;

        let submissions = paginator.fetch_page(page - 1).await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to list submissions: {e}"))
        })?;

        let items = submissions
            .into_iter()
            .map(|s| SubmissionListItem {
                id: s.id,
                test_id: s.test_id,
                user_id: s.user_id,
                total_score: s.total_score,
                submitted_at: chrono::DateTime::from_timestamp(s.submitted_at, 0)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_default(),
            })
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 读侧检查：某用户是否已提交过某测试
    pub async fn has_submitted_impl(&self, test_id: i64, user_id: i64) -> Result<bool> {
        let count = Submissions::find()
            .filter(Column::TestId.eq(test_id))
            .filter(Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to count submissions: {e}"))
            })?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::choices::ActiveModel as ChoiceActiveModel;
    use crate::entity::job_applications::ActiveModel as JobApplicationActiveModel;
    use crate::entity::jobs::ActiveModel as JobActiveModel;
    use crate::entity::questions::ActiveModel as QuestionActiveModel;
    use crate::entity::tests::ActiveModel as TestActiveModel;
    use crate::entity::users::ActiveModel as UserActiveModel;
    use crate::models::evaluations::requests::AnswerInput;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    const CANDIDATE_ID: i64 = 5;
    const STAFF_ID: i64 = 6;
    const JOB_ID: i64 = 3;
    const APPLICATION_ID: i64 = 9;
    const TEST_ID: i64 = 1;

    async fn setup_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        // 内存库必须固定单连接，否则每个池连接各自为政
        opt.max_connections(1);
        let db = Database::connect(opt)
            .await
            .expect("Failed to connect to in-memory SQLite");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        let storage = SeaOrmStorage { db };
        seed_fixture(&storage).await;
        storage
    }

    /// 测试夹具：候选人 5、职员 6、职位 3、申请 9、测试 1，
    /// 题目 10（选项 100 错误 / 101 正确）和题目 11（选项 110 正确 / 111 错误）。
    async fn seed_fixture(storage: &SeaOrmStorage) {
        let now = 1_700_000_000;

        for (id, username, role) in [
            (CANDIDATE_ID, "candidate-five", "basic"),
            (STAFF_ID, "staff-member", "staff"),
        ] {
            UserActiveModel {
                id: Set(id),
                username: Set(username.to_string()),
                email: Set(format!("{username}@example.com")),
                password_hash: Set("not-a-real-hash".to_string()),
                role: Set(role.to_string()),
                status: Set("active".to_string()),
                display_name: Set(None),
                last_login: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&storage.db)
            .await
            .expect("Failed to seed user");
        }

        JobActiveModel {
            id: Set(JOB_ID),
            title: Set("Backend Engineer".to_string()),
            description: Set(None),
            location: Set(Some("Remote".to_string())),
            employment_type: Set("full_time".to_string()),
            status: Set("open".to_string()),
            created_by: Set(STAFF_ID),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&storage.db)
        .await
        .expect("Failed to seed job");

        JobApplicationActiveModel {
            id: Set(APPLICATION_ID),
            job_id: Set(JOB_ID),
            applicant_id: Set(CANDIDATE_ID),
            status: Set("written_test".to_string()),
            submission_id: Set(None),
            applied_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&storage.db)
        .await
        .expect("Failed to seed application");

        TestActiveModel {
            id: Set(TEST_ID),
            title: Set("Screening test".to_string()),
            total_score: Set(2),
            created_by: Set(STAFF_ID),
            created_at: Set(now),
        }
        .insert(&storage.db)
        .await
        .expect("Failed to seed test");

        for (id, position, text) in [(10, 1, "First question"), (11, 2, "Second question")] {
            QuestionActiveModel {
                id: Set(id),
                test_id: Set(TEST_ID),
                created_by: Set(STAFF_ID),
                text: Set(text.to_string()),
                position: Set(position),
            }
            .insert(&storage.db)
            .await
            .expect("Failed to seed question");
        }

        for (id, question_id, is_correct) in
            [(100, 10, false), (101, 10, true), (110, 11, true), (111, 11, false)]
        {
            ChoiceActiveModel {
                id: Set(id),
                question_id: Set(question_id),
                text: Set(format!("Choice {id}")),
                is_correct: Set(is_correct),
            }
            .insert(&storage.db)
            .await
            .expect("Failed to seed choice");
        }
    }

    fn request(answers: Vec<AnswerInput>) -> SubmitTestRequest {
        SubmitTestRequest {
            test_id: TEST_ID,
            job_application_id: APPLICATION_ID,
            answers,
        }
    }

    fn answer(question_id: i64, choice_id: i64) -> AnswerInput {
        AnswerInput {
            question_id,
            choice_id,
        }
    }

    async fn count_submissions(storage: &SeaOrmStorage) -> u64 {
        Submissions::find().count(&storage.db).await.unwrap()
    }

    async fn count_answers(storage: &SeaOrmStorage) -> u64 {
        Answers::find().count(&storage.db).await.unwrap()
    }

    #[tokio::test]
    async fn test_submit_scores_and_links_application() {
        let storage = setup_storage().await;

        let submission = storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(10, 101)]),
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap();

        assert_eq!(submission.total_score, 1);
        assert_eq!(submission.answers.len(), 1);
        assert_eq!(submission.answers[0].question_id, 10);
        assert_eq!(submission.answers[0].choice_id, 101);

        // 申请的结果指针在同一事务内指向新提交
        let application = JobApplications::find_by_id(APPLICATION_ID)
            .one(&storage.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(application.submission_id, Some(submission.id));
    }

    #[tokio::test]
    async fn test_incorrect_choice_recorded_without_score() {
        let storage = setup_storage().await;

        let submission = storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(10, 100)]),
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap();

        // 选项可解析但不正确：答案入库，得分为 0
        assert_eq!(submission.total_score, 0);
        assert_eq!(submission.answers.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_test_aborts_before_any_write() {
        let storage = setup_storage().await;

        let err = storage
            .submit_test_impl(
                CANDIDATE_ID,
                SubmitTestRequest {
                    test_id: 999,
                    job_application_id: APPLICATION_ID,
                    answers: vec![answer(10, 101)],
                },
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap_err();

        assert!(err.message().contains("Test 999"));
        assert_eq!(count_submissions(&storage).await, 0);
        assert_eq!(count_answers(&storage).await, 0);

        let application = JobApplications::find_by_id(APPLICATION_ID)
            .one(&storage.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(application.submission_id, None);
    }

    #[tokio::test]
    async fn test_missing_user_and_application_named_in_error() {
        let storage = setup_storage().await;

        let err = storage
            .submit_test_impl(4242, request(vec![]), UnresolvedAnswerPolicy::Skip)
            .await
            .unwrap_err();
        assert!(err.message().contains("User 4242"));

        let err = storage
            .submit_test_impl(
                CANDIDATE_ID,
                SubmitTestRequest {
                    test_id: TEST_ID,
                    job_application_id: 777,
                    answers: vec![],
                },
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap_err();
        assert!(err.message().contains("Job application 777"));
        assert_eq!(count_submissions(&storage).await, 0);
    }

    #[tokio::test]
    async fn test_dangling_answer_tolerated() {
        let storage = setup_storage().await;

        let submission = storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(10, 101), answer(999, 110)]),
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap();

        // N 条答案中 1 条悬空：保留 N-1 条，得分只反映可解析的部分
        assert_eq!(submission.total_score, 1);
        assert_eq!(submission.answers.len(), 1);
        assert_eq!(count_answers(&storage).await, 1);
    }

    #[tokio::test]
    async fn test_all_dangling_answers_still_succeed() {
        let storage = setup_storage().await;

        let submission = storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(999, 101)]),
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap();

        assert_eq!(submission.total_score, 0);
        assert!(submission.answers.is_empty());
        assert_eq!(count_answers(&storage).await, 0);
    }

    #[tokio::test]
    async fn test_reject_policy_aborts_before_transaction() {
        let storage = setup_storage().await;

        let err = storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(999, 101)]),
                UnresolvedAnswerPolicy::Reject,
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), "E013");
        assert_eq!(count_submissions(&storage).await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_submissions_last_write_wins() {
        let storage = setup_storage().await;

        let first = storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(10, 101)]),
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap();
        let second = storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(10, 100)]),
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap();

        // 没有唯一约束：两行都存在，申请指针指向最后一次提交
        assert_ne!(first.id, second.id);
        assert_eq!(count_submissions(&storage).await, 2);

        let application = JobApplications::find_by_id(APPLICATION_ID)
            .one(&storage.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(application.submission_id, Some(second.id));
    }

    #[tokio::test]
    async fn test_failed_application_update_rolls_back_submission() {
        let storage = setup_storage().await;

        let batch = ScoredBatch {
            total_score: 1,
            accepted: vec![scoring::AcceptedAnswer {
                question_id: 10,
                choice_id: 101,
                is_correct: true,
            }],
        };

        let txn = storage.db.begin().await.unwrap();
        let err = persist_submission(&txn, TEST_ID, CANDIDATE_ID, 9999, 1_700_000_100, &batch)
            .await
            .unwrap_err();
        txn.rollback().await.unwrap();

        // 提交插入成功后申请更新失败：整个单元回滚，不留下孤儿提交
        assert!(err.message().contains("Job application 9999"));
        assert_eq!(count_submissions(&storage).await, 0);
        assert_eq!(count_answers(&storage).await, 0);
    }

    #[tokio::test]
    async fn test_has_submitted_flips_after_submit() {
        let storage = setup_storage().await;

        assert!(!storage.has_submitted_impl(TEST_ID, CANDIDATE_ID).await.unwrap());

        storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(10, 101)]),
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap();

        assert!(storage.has_submitted_impl(TEST_ID, CANDIDATE_ID).await.unwrap());
        assert!(!storage.has_submitted_impl(TEST_ID, STAFF_ID).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_submission_returns_answers() {
        let storage = setup_storage().await;

        let created = storage
            .submit_test_impl(
                CANDIDATE_ID,
                request(vec![answer(10, 101), answer(11, 111)]),
                UnresolvedAnswerPolicy::Skip,
            )
            .await
            .unwrap();

        let fetched = storage
            .get_submission_by_id_impl(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.total_score, 1);
        assert_eq!(fetched.answers.len(), 2);

        assert!(storage.get_submission_by_id_impl(424242).await.unwrap().is_none());
    }
}
