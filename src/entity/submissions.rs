//! 提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub professor_id: i64,
    pub work_category_id: i64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub submission_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub action_description: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ProfessorId",
        to = "super::users::Column::Id"
    )]
    Professor,
    #[sea_orm(
        belongs_to = "super::work_categories::Entity",
        from = "Column::WorkCategoryId",
        to = "super::work_categories::Column::Id"
    )]
    WorkCategory,
    #[sea_orm(has_many = "super::file_submissions::Entity")]
    FileSubmissions,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::work_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkCategory.def()
    }
}

impl Related<super::file_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FileSubmissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 携带满足的要求与证明文件转换为业务模型
    pub fn into_submission(
        self,
        fulfilled_requirement_ids: Vec<i64>,
        files: Vec<super::file_submissions::Model>,
    ) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::{Submission, SubmissionStatus};
        use chrono::{DateTime, Utc};

        Submission {
            id: self.id,
            professor_id: self.professor_id,
            work_category_id: self.work_category_id,
            status: self
                .status
                .parse::<SubmissionStatus>()
                .unwrap_or(SubmissionStatus::Processing),
            submission_description: self.submission_description,
            action_description: self.action_description,
            fulfilled_requirement_ids,
            files: files.into_iter().map(|f| f.into_file_submission()).collect(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
