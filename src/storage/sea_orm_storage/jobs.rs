use super::SeaOrmStorage;
use crate::entity::jobs::{ActiveModel, Column, Entity as Jobs};
use crate::errors::{JobBoardError, Result};
use crate::models::{
    PaginationInfo,
    jobs::{
        entities::{Job, JobStatus},
        requests::{CreateJobRequest, JobListQuery, UpdateJobRequest},
        responses::JobListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建职位
    pub async fn create_job_impl(&self, created_by: i64, req: CreateJobRequest) -> Result<Job> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            location: Set(req.location),
            employment_type: Set(req.employment_type),
            status: Set(JobStatus::Open.to_string()),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to create job: {e}")))?;

        Ok(result.into_job())
    }

    /// 通过 ID 获取职位
    pub async fn get_job_by_id_impl(&self, job_id: i64) -> Result<Option<Job>> {
        let result = Jobs::find_by_id(job_id)
            .one(&self.db)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to query job: {e}")))?;

        Ok(result.map(|m| m.into_job()))
    }

    /// 分页列出职位
    pub async fn list_jobs_with_pagination_impl(
        &self,
        query: JobListQuery,
    ) -> Result<JobListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Jobs::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Location.contains(&escaped)),
            );
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to count jobs: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to count job pages: {e}"))
        })?;

        let jobs = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to list jobs: {e}")))?;

        Ok(JobListResponse {
            items: jobs.into_iter().map(|m| m.into_job()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新职位信息
    pub async fn update_job_impl(
        &self,
        job_id: i64,
        update: UpdateJobRequest,
    ) -> Result<Option<Job>> {
        // 先检查职位是否存在
        let existing = self.get_job_by_id_impl(job_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(job_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }

        if let Some(employment_type) = update.employment_type {
            model.employment_type = Set(employment_type);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to update job: {e}")))?;

        self.get_job_by_id_impl(job_id).await
    }

    /// 删除职位
    pub async fn delete_job_impl(&self, job_id: i64) -> Result<bool> {
        let result = Jobs::delete_by_id(job_id)
            .exec(&self.db)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to delete job: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
