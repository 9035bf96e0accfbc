//! 求职申请存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::job_applications::{ActiveModel, Column, Entity as JobApplications};
use crate::entity::jobs::{Column as JobColumn, Entity as Jobs};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{JobBoardError, Result};
use crate::models::{
    PaginationInfo,
    applications::{
        entities::{ApplicationStatus, JobApplication},
        requests::ApplicationListQuery,
        responses::{
            ApplicantInfo, ApplicationJobInfo, ApplicationListItem, ApplicationListResponse,
        },
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建求职申请
    pub async fn create_application_impl(
        &self,
        job_id: i64,
        applicant_id: i64,
    ) -> Result<JobApplication> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            job_id: Set(job_id),
            applicant_id: Set(applicant_id),
            status: Set(ApplicationStatus::Submitted.to_string()),
            submission_id: Set(None),
            applied_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to create application: {e}"))
        })?;

        Ok(result.into_application())
    }

    /// 通过 ID 获取申请
    pub async fn get_application_by_id_impl(
        &self,
        application_id: i64,
    ) -> Result<Option<JobApplication>> {
        let result = JobApplications::find_by_id(application_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to query application: {e}"))
            })?;

        Ok(result.map(|m| m.into_application()))
    }

    /// 获取某候选人对某职位的申请
    pub async fn get_application_by_job_and_user_impl(
        &self,
        job_id: i64,
        applicant_id: i64,
    ) -> Result<Option<JobApplication>> {
        let result = JobApplications::find()
            .filter(Column::JobId.eq(job_id))
            .filter(Column::ApplicantId.eq(applicant_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to query application: {e}"))
            })?;

        Ok(result.map(|m| m.into_application()))
    }

    /// 分页列出申请
    pub async fn list_applications_with_pagination_impl(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = JobApplications::find();

        // 职位筛选
        if let Some(job_id) = query.job_id {
            select = select.filter(Column::JobId.eq(job_id));
        }

        // 申请人筛选
        if let Some(applicant_id) = query.applicant_id {
            select = select.filter(Column::ApplicantId.eq(applicant_id));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 排序
        select = select.order_by_desc(Column::AppliedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to count applications: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to count application pages: {e}"))
        })?;

        let applications = paginator.fetch_page(page - 1).await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to list applications: {e}"))
        })?;

        // 批量查询申请人与职位信息
        let applicant_ids: Vec<i64> = applications
            .iter()
            .map(|a| a.applicant_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        let job_ids: Vec<i64> = applications
            .iter()
            .map(|a| a.job_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let users = Users::find()
            .filter(UserColumn::Id.is_in(applicant_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                JobBoardError::database_operation(format!("Failed to query applicants: {e}"))
            })?;
        let jobs = Jobs::find()
            .filter(JobColumn::Id.is_in(job_ids))
            .all(&self.db)
            .await
            .map_err(|e| JobBoardError::database_operation(format!("Failed to query jobs: {e}")))?;

        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();
        let job_map: HashMap<i64, _> = jobs.into_iter().map(|j| (j.id, j)).collect();

        // 组装 ApplicationListItem
        let items = applications
            .into_iter()
            .map(|a| {
                let user = user_map.get(&a.applicant_id);
                let job = job_map.get(&a.job_id);
                ApplicationListItem {
                    id: a.id,
                    job: ApplicationJobInfo {
                        id: a.job_id,
                        title: job.map(|j| j.title.clone()).unwrap_or_default(),
                        status: job.map(|j| j.status.clone()).unwrap_or_default(),
                    },
                    applicant: ApplicantInfo {
                        id: a.applicant_id,
                        username: user
                            .map(|u| u.username.clone())
                            .unwrap_or_else(|| "unknown".to_string()),
                        display_name: user.and_then(|u| u.display_name.clone()),
                    },
                    status: a
                        .status
                        .parse::<ApplicationStatus>()
                        .unwrap_or(ApplicationStatus::Submitted),
                    submission_id: a.submission_id,
                    applied_at: chrono::DateTime::from_timestamp(a.applied_at, 0)
                        .map(|dt| dt.to_rfc3339())
                        .unwrap_or_default(),
                }
            })
            .collect();

        Ok(ApplicationListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新申请状态
    pub async fn update_application_status_impl(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>> {
        let existing = self.get_application_by_id_impl(application_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(application_id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| {
            JobBoardError::database_operation(format!("Failed to update application status: {e}"))
        })?;

        self.get_application_by_id_impl(application_id).await
    }
}
