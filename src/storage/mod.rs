use std::sync::Arc;

use crate::models::{
    applications::{
        entities::{ApplicationStatus, JobApplication},
        requests::ApplicationListQuery,
        responses::ApplicationListResponse,
    },
    evaluations::{
        entities::{Submission, UnresolvedAnswerPolicy},
        requests::{SubmissionListQuery, SubmitTestRequest},
        responses::SubmissionListResponse,
    },
    jobs::{
        entities::Job,
        requests::{CreateJobRequest, JobListQuery, UpdateJobRequest},
        responses::JobListResponse,
    },
    tests::{
        entities::Test,
        requests::{CreateTestRequest, TestListQuery},
        responses::TestListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 职位管理方法
    // 创建职位
    async fn create_job(&self, created_by: i64, job: CreateJobRequest) -> Result<Job>;
    // 通过ID获取职位信息
    async fn get_job_by_id(&self, job_id: i64) -> Result<Option<Job>>;
    // 列出职位
    async fn list_jobs_with_pagination(&self, query: JobListQuery) -> Result<JobListResponse>;
    // 更新职位信息
    async fn update_job(&self, job_id: i64, update: UpdateJobRequest) -> Result<Option<Job>>;
    // 删除职位
    async fn delete_job(&self, job_id: i64) -> Result<bool>;

    /// 求职申请管理方法
    // 候选人申请职位
    async fn create_application(&self, job_id: i64, applicant_id: i64) -> Result<JobApplication>;
    // 通过ID获取申请
    async fn get_application_by_id(&self, application_id: i64) -> Result<Option<JobApplication>>;
    // 获取某候选人对某职位的申请
    async fn get_application_by_job_and_user(
        &self,
        job_id: i64,
        applicant_id: i64,
    ) -> Result<Option<JobApplication>>;
    // 列出申请
    async fn list_applications_with_pagination(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse>;
    // 更新申请状态
    async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>>;

    /// 筛选测试管理方法
    // 创建测试（整个聚合一次性批量写入）
    async fn create_test(&self, created_by: i64, test: CreateTestRequest) -> Result<Test>;
    // 获取测试详情（含题目与选项）
    async fn get_test_by_id(&self, test_id: i64) -> Result<Option<Test>>;
    // 列出测试
    async fn list_tests_with_pagination(&self, query: TestListQuery) -> Result<TestListResponse>;
    // 删除测试
    async fn delete_test(&self, test_id: i64) -> Result<bool>;

    /// 评分提交方法
    // 提交测试：查找、评分并在一个事务内落库
    async fn submit_test(
        &self,
        user_id: i64,
        request: SubmitTestRequest,
        policy: UnresolvedAnswerPolicy,
    ) -> Result<Submission>;
    // 获取提交详情（含答案）
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 列出提交
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 读侧检查：某用户是否已提交过某测试
    async fn has_submitted(&self, test_id: i64, user_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
