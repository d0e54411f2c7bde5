//! 工作类别实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "work_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub max_percentage: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::requirements::Entity")]
    Requirements,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::requirements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requirements.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 携带其要求集合转换为业务模型
    pub fn into_work_category(
        self,
        requirements: Vec<super::requirements::Model>,
    ) -> crate::models::work_categories::entities::WorkCategory {
        use chrono::{DateTime, Utc};

        crate::models::work_categories::entities::WorkCategory {
            id: self.id,
            name: self.name,
            description: self.description,
            max_percentage: self.max_percentage,
            requirements: requirements
                .into_iter()
                .map(|r| r.into_requirement())
                .collect(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
