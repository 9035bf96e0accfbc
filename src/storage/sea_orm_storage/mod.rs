//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod job_applications;
mod jobs;
mod scoring;
mod submissions;
mod tests;
mod users;

use crate::config::AppConfig;
use crate::errors::{JobBoardError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                JobBoardError::database_config(format!("Failed to parse SQLite URL: {e}"))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                JobBoardError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            JobBoardError::database_connection(format!("Failed to connect to database: {e}"))
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(JobBoardError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or .db/.sqlite file paths"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 职位模块
    async fn create_job(&self, created_by: i64, job: CreateJobRequest) -> Result<Job> {
        self.create_job_impl(created_by, job).await
    }

    async fn get_job_by_id(&self, job_id: i64) -> Result<Option<Job>> {
        self.get_job_by_id_impl(job_id).await
    }

    async fn list_jobs_with_pagination(&self, query: JobListQuery) -> Result<JobListResponse> {
        self.list_jobs_with_pagination_impl(query).await
    }

    async fn update_job(&self, job_id: i64, update: UpdateJobRequest) -> Result<Option<Job>> {
        self.update_job_impl(job_id, update).await
    }

    async fn delete_job(&self, job_id: i64) -> Result<bool> {
        self.delete_job_impl(job_id).await
    }

    // 申请模块
    async fn create_application(&self, job_id: i64, applicant_id: i64) -> Result<JobApplication> {
        self.create_application_impl(job_id, applicant_id).await
    }

    async fn get_application_by_id(&self, application_id: i64) -> Result<Option<JobApplication>> {
        self.get_application_by_id_impl(application_id).await
    }

    async fn get_application_by_job_and_user(
        &self,
        job_id: i64,
        applicant_id: i64,
    ) -> Result<Option<JobApplication>> {
        self.get_application_by_job_and_user_impl(job_id, applicant_id)
            .await
    }

    async fn list_applications_with_pagination(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse> {
        self.list_applications_with_pagination_impl(query).await
    }

    async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>> {
        self.update_application_status_impl(application_id, status)
            .await
    }

    // 测试模块
    async fn create_test(&self, created_by: i64, test: CreateTestRequest) -> Result<Test> {
        self.create_test_impl(created_by, test).await
    }

    async fn get_test_by_id(&self, test_id: i64) -> Result<Option<Test>> {
        self.get_test_by_id_impl(test_id).await
    }

    async fn list_tests_with_pagination(&self, query: TestListQuery) -> Result<TestListResponse> {
        self.list_tests_with_pagination_impl(query).await
    }

    async fn delete_test(&self, test_id: i64) -> Result<bool> {
        self.delete_test_impl(test_id).await
    }

    // 评分提交模块
    async fn submit_test(
        &self,
        user_id: i64,
        request: SubmitTestRequest,
        policy: UnresolvedAnswerPolicy,
    ) -> Result<Submission> {
        self.submit_test_impl(user_id, request, policy).await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn has_submitted(&self, test_id: i64, user_id: i64) -> Result<bool> {
        self.has_submitted_impl(test_id, user_id).await
    }
}
