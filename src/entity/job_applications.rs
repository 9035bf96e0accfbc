//! 求职申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub status: String,
    pub submission_id: Option<i64>,
    pub applied_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::jobs::Entity",
        from = "Column::JobId",
        to = "super::jobs::Column::Id"
    )]
    Job,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ApplicantId",
        to = "super::users::Column::Id"
    )]
    Applicant,
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submission,
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applicant.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_application(self) -> crate::models::applications::entities::JobApplication {
        use crate::models::applications::entities::{ApplicationStatus, JobApplication};
        use chrono::{DateTime, Utc};

        JobApplication {
            id: self.id,
            job_id: self.job_id,
            applicant_id: self.applicant_id,
            status: self
                .status
                .parse::<ApplicationStatus>()
                .unwrap_or(ApplicationStatus::Submitted),
            submission_id: self.submission_id,
            applied_at: DateTime::<Utc>::from_timestamp(self.applied_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
