use super::SeaOrmStorage;
use crate::entity::prelude::{Requirements, WorkCategories};
use crate::entity::{requirements, work_categories};
use crate::errors::{Result, WorkSystemError};
use crate::models::work_categories::{
    entities::WorkCategory,
    requests::{CreateWorkCategoryRequest, RequirementPayload, UpdateWorkCategoryRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建工作类别及其嵌套要求（单事务）
    pub async fn create_work_category_impl(
        &self,
        req: CreateWorkCategoryRequest,
    ) -> Result<WorkCategory> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            WorkSystemError::database_operation(format!("开启类别创建事务失败: {e}"))
        })?;

        let dup = WorkCategories::find()
            .filter(work_categories::Column::Name.eq(req.name.as_str()))
            .one(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询类别失败: {e}")))?;
        if dup.is_some() {
            return Err(WorkSystemError::conflict(format!(
                "Work category '{}' already exists",
                req.name
            )));
        }

        let category = work_categories::ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            max_percentage: Set(req.max_percentage),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| WorkSystemError::database_operation(format!("创建工作类别失败: {e}")))?;

        let requirement_models =
            Self::insert_requirements(&txn, category.id, req.requirements).await?;

        txn.commit().await.map_err(|e| {
            WorkSystemError::database_operation(format!("提交类别创建事务失败: {e}"))
        })?;

        Ok(category.into_work_category(requirement_models))
    }

    /// 编辑工作类别，其要求集合整体重写（单事务）
    ///
    /// 旧要求一律删除后按新载荷重建，任何一步失败全部回滚，
    /// 不会留下半改状态的目录。
    pub async fn update_work_category_impl(
        &self,
        id: i64,
        update: UpdateWorkCategoryRequest,
    ) -> Result<Option<WorkCategory>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            WorkSystemError::database_operation(format!("开启类别编辑事务失败: {e}"))
        })?;

        let existing = WorkCategories::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询类别失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        // 重名检查要排除自身
        let dup = WorkCategories::find()
            .filter(work_categories::Column::Name.eq(update.name.as_str()))
            .filter(work_categories::Column::Id.ne(id))
            .one(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询类别失败: {e}")))?;
        if dup.is_some() {
            return Err(WorkSystemError::conflict(format!(
                "Work category '{}' already exists",
                update.name
            )));
        }

        let category = work_categories::ActiveModel {
            id: Set(id),
            name: Set(update.name),
            description: Set(update.description),
            max_percentage: Set(update.max_percentage),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| WorkSystemError::database_operation(format!("更新工作类别失败: {e}")))?;

        Requirements::delete_many()
            .filter(requirements::Column::WorkCategoryId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("删除旧要求失败: {e}")))?;

        let requirement_models = Self::insert_requirements(&txn, id, update.requirements).await?;

        txn.commit().await.map_err(|e| {
            WorkSystemError::database_operation(format!("提交类别编辑事务失败: {e}"))
        })?;

        Ok(Some(category.into_work_category(requirement_models)))
    }

    /// 通过 ID 获取工作类别（含要求）
    pub async fn get_work_category_by_id_impl(&self, id: i64) -> Result<Option<WorkCategory>> {
        let category = WorkCategories::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询类别失败: {e}")))?;

        match category {
            Some(category) => {
                let reqs = Requirements::find()
                    .filter(requirements::Column::WorkCategoryId.eq(id))
                    .order_by_asc(requirements::Column::Id)
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        WorkSystemError::database_operation(format!("查询类别要求失败: {e}"))
                    })?;
                Ok(Some(category.into_work_category(reqs)))
            }
            None => Ok(None),
        }
    }

    /// 列出全部工作类别（含要求，一次预取）
    pub async fn list_work_categories_impl(&self) -> Result<Vec<WorkCategory>> {
        let rows = WorkCategories::find()
            .find_with_related(Requirements)
            .order_by_asc(work_categories::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询类别列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(category, reqs)| category.into_work_category(reqs))
            .collect())
    }

    async fn insert_requirements<C: ConnectionTrait>(
        conn: &C,
        work_category_id: i64,
        payloads: Vec<RequirementPayload>,
    ) -> Result<Vec<requirements::Model>> {
        let mut models = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let model = requirements::ActiveModel {
                work_category_id: Set(work_category_id),
                name: Set(payload.name),
                description: Set(payload.description),
                max_percentage_increase: Set(payload.max_percentage_increase),
                ..Default::default()
            }
            .insert(conn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("创建要求失败: {e}")))?;
            models.push(model);
        }
        Ok(models)
    }
}
