//! 要求实体（工作类别下的证明条件）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "requirements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub work_category_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub max_percentage_increase: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::work_categories::Entity",
        from = "Column::WorkCategoryId",
        to = "super::work_categories::Column::Id"
    )]
    WorkCategory,
    #[sea_orm(has_many = "super::file_submissions::Entity")]
    FileSubmissions,
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
    pub fn into_requirement(self) -> crate::models::work_categories::entities::Requirement {
        crate::models::work_categories::entities::Requirement {
            id: self.id,
            work_category_id: self.work_category_id,
            name: self.name,
            description: self.description,
            max_percentage_increase: self.max_percentage_increase,
        }
    }
}
