use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::prelude::{
    FileSubmissions, Requirements, SubmissionRequirements, Submissions, Users, WorkCategories,
};
use crate::entity::{file_submissions, requirements, submission_requirements, submissions};
use crate::errors::{Result, WorkSystemError};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{ReviewAction, ReviewOutcome, ReviewStage, Submission, SubmissionStatus},
        requests::{NewSubmission, SubmissionListQuery},
        responses::{SubmissionListItem, SubmissionListResponse, SubmissionProfessor},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::warn;

impl SeaOrmStorage {
    /// 创建提交聚合（提交 + 满足的要求关联 + 文件记录，单事务）
    ///
    /// 上传字段引用的要求必须属于目标类别。无效引用在宽松模式下
    /// 跳过并告警（全部无效时满足集合为空），严格模式下拒绝整个提交。
    pub async fn create_submission_impl(
        &self,
        new: NewSubmission,
        strict: bool,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            WorkSystemError::database_operation(format!("开启提交创建事务失败: {e}"))
        })?;

        WorkCategories::find_by_id(new.work_category_id)
            .one(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询类别失败: {e}")))?
            .ok_or_else(|| {
                WorkSystemError::not_found(format!(
                    "Work category {} does not exist",
                    new.work_category_id
                ))
            })?;

        let valid_ids: HashSet<i64> = Requirements::find()
            .filter(requirements::Column::WorkCategoryId.eq(new.work_category_id))
            .all(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询类别要求失败: {e}")))?
            .into_iter()
            .map(|r| r.id)
            .collect();

        let (valid_files, invalid_files): (Vec<_>, Vec<_>) = new
            .files
            .into_iter()
            .partition(|f| valid_ids.contains(&f.requirement_id));

        if !invalid_files.is_empty() {
            let invalid_keys: Vec<i64> = invalid_files.iter().map(|f| f.requirement_id).collect();
            if strict {
                return Err(WorkSystemError::validation(format!(
                    "Unknown requirement keys for category {}: {:?}",
                    new.work_category_id, invalid_keys
                )));
            }
            warn!(
                "跳过无效的要求键 {:?}（类别 {}，教授 {}）",
                invalid_keys, new.work_category_id, new.professor_id
            );
        }

        let submission = submissions::ActiveModel {
            professor_id: Set(new.professor_id),
            work_category_id: Set(new.work_category_id),
            status: Set(SubmissionStatus::Processing.to_string()),
            submission_description: Set(new.submission_description),
            action_description: Set(None),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| WorkSystemError::database_operation(format!("创建提交失败: {e}")))?;

        // 满足的要求 = 有效文件去重后的目标要求集合
        let mut fulfilled: Vec<i64> = valid_files
            .iter()
            .map(|f| f.requirement_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        fulfilled.sort_unstable();

        for requirement_id in &fulfilled {
            submission_requirements::ActiveModel {
                submission_id: Set(submission.id),
                requirement_id: Set(*requirement_id),
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                WorkSystemError::database_operation(format!("创建提交要求关联失败: {e}"))
            })?;
        }

        let mut file_models = Vec::with_capacity(valid_files.len());
        for file in valid_files {
            let model = file_submissions::ActiveModel {
                submission_id: Set(submission.id),
                requirement_id: Set(file.requirement_id),
                original_name: Set(file.original_name),
                stored_name: Set(file.stored_name),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("创建文件记录失败: {e}")))?;
            file_models.push(model);
        }

        txn.commit().await.map_err(|e| {
            WorkSystemError::database_operation(format!("提交创建事务提交失败: {e}"))
        })?;

        Ok(submission.into_submission(fulfilled, file_models))
    }

    /// 通过 ID 获取提交（含满足的要求与文件）
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let submission = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交失败: {e}")))?;

        let Some(submission) = submission else {
            return Ok(None);
        };

        let fulfilled = SubmissionRequirements::find()
            .filter(submission_requirements::Column::SubmissionId.eq(id))
            .all(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交要求失败: {e}")))?
            .into_iter()
            .map(|link| link.requirement_id)
            .collect();

        let files = FileSubmissions::find()
            .filter(file_submissions::Column::SubmissionId.eq(id))
            .order_by_asc(file_submissions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交文件失败: {e}")))?;

        Ok(Some(submission.into_submission(fulfilled, files)))
    }

    /// 分页列出提交（带教授与类别摘要）
    pub async fn list_submissions_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Submissions::find();

        if let Some(ref status) = query.status {
            let status = status
                .parse::<SubmissionStatus>()
                .map_err(WorkSystemError::validation)?;
            select = select.filter(submissions::Column::Status.eq(status.to_string()));
        }

        if let Some(professor_id) = query.professor_id {
            select = select.filter(submissions::Column::ProfessorId.eq(professor_id));
        }

        // 秒级时间戳会撞车，再按 ID 倒序兜底
        select = select
            .order_by_desc(submissions::Column::CreatedAt)
            .order_by_desc(submissions::Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交页数失败: {e}")))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交列表失败: {e}")))?;

        let submission_ids: Vec<i64> = rows.iter().map(|s| s.id).collect();
        let professor_ids: HashSet<i64> = rows.iter().map(|s| s.professor_id).collect();
        let category_ids: HashSet<i64> = rows.iter().map(|s| s.work_category_id).collect();

        // 批量预取教授、类别、要求关联与文件，避免逐行查询
        let professors: HashMap<i64, (String, Option<String>)> = Users::find()
            .filter(crate::entity::users::Column::Id.is_in(professor_ids))
            .all(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询教授信息失败: {e}")))?
            .into_iter()
            .map(|u| (u.id, (u.username, u.display_name)))
            .collect();

        let categories: HashMap<i64, String> = WorkCategories::find()
            .filter(crate::entity::work_categories::Column::Id.is_in(category_ids))
            .all(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询类别信息失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let mut fulfilled_by_submission: HashMap<i64, Vec<i64>> = HashMap::new();
        for link in SubmissionRequirements::find()
            .filter(submission_requirements::Column::SubmissionId.is_in(submission_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交要求失败: {e}")))?
        {
            fulfilled_by_submission
                .entry(link.submission_id)
                .or_default()
                .push(link.requirement_id);
        }

        let mut files_by_submission: HashMap<i64, Vec<file_submissions::Model>> = HashMap::new();
        for file in FileSubmissions::find()
            .filter(file_submissions::Column::SubmissionId.is_in(submission_ids))
            .order_by_asc(file_submissions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交文件失败: {e}")))?
        {
            files_by_submission
                .entry(file.submission_id)
                .or_default()
                .push(file);
        }

        let items = rows
            .into_iter()
            .map(|row| {
                let (username, display_name) = professors
                    .get(&row.professor_id)
                    .cloned()
                    .unwrap_or_else(|| (String::new(), None));
                let professor = SubmissionProfessor {
                    id: row.professor_id,
                    username,
                    display_name,
                };
                let work_category_name = categories
                    .get(&row.work_category_id)
                    .cloned()
                    .unwrap_or_default();
                let fulfilled = fulfilled_by_submission.remove(&row.id).unwrap_or_default();
                let files = files_by_submission.remove(&row.id).unwrap_or_default();
                let submission = row.into_submission(fulfilled, files);
                SubmissionListItem {
                    id: submission.id,
                    professor,
                    work_category_id: submission.work_category_id,
                    work_category_name,
                    status: submission.status,
                    submission_description: submission.submission_description,
                    action_description: submission.action_description,
                    fulfilled_requirement_ids: submission.fulfilled_requirement_ids,
                    files: submission.files,
                    created_at: submission.created_at,
                }
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

    /// 应用一次审核动作（乐观 CAS）
    ///
    /// 状态推进以「当前状态 = 该级别的合法起点」为 WHERE 条件，
    /// 并发或重放的第二次动作命中 0 行，静默降级为 no-op。
    pub async fn apply_review_transition_impl(
        &self,
        id: i64,
        stage: ReviewStage,
        action: ReviewAction,
        action_description: Option<String>,
    ) -> Result<ReviewOutcome> {
        let expected = SubmissionStatus::expected_source(stage);
        let target = expected
            .transition(stage, action)
            .ok_or_else(|| WorkSystemError::validation("Unsupported review transition"))?;

        let mut update = Submissions::update_many()
            .col_expr(
                submissions::Column::Status,
                sea_orm::sea_query::Expr::value(target.to_string()),
            )
            .filter(submissions::Column::Id.eq(id))
            .filter(submissions::Column::Status.eq(expected.to_string()));

        if let Some(ref description) = action_description {
            update = update.col_expr(
                submissions::Column::ActionDescription,
                sea_orm::sea_query::Expr::value(description.clone()),
            );
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("更新提交状态失败: {e}")))?;

        if result.rows_affected > 0 {
            return Ok(ReviewOutcome::Applied(target));
        }

        // 零行命中：要么提交不存在，要么前置状态不符
        let current = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| WorkSystemError::database_operation(format!("查询提交失败: {e}")))?
            .ok_or_else(|| WorkSystemError::not_found(format!("Submission {id} does not exist")))?;

        let current_status = current
            .status
            .parse::<SubmissionStatus>()
            .map_err(WorkSystemError::validation)?;

        Ok(ReviewOutcome::NoOp(current_status))
    }
}
