use std::sync::Arc;

use crate::models::{
    departments::entities::Department,
    submissions::{
        entities::{ReviewAction, ReviewOutcome, ReviewStage, Submission},
        requests::{NewSubmission, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
    users::{entities::User, requests::CreateUserRequest, responses::UserResponse},
    work_categories::{
        entities::WorkCategory,
        requests::{CreateWorkCategoryRequest, UpdateWorkCategoryRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（含档案与可选的院系，单事务）
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserResponse>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 用户总数（启动时判断是否需要播种管理员）
    async fn count_users(&self) -> Result<u64>;
    // 列出院系
    async fn list_departments(&self) -> Result<Vec<Department>>;

    /// 工作类别目录方法
    // 创建类别及其嵌套要求（单事务）
    async fn create_work_category(&self, category: CreateWorkCategoryRequest)
    -> Result<WorkCategory>;
    // 编辑类别，要求集合整体重写（单事务）
    async fn update_work_category(
        &self,
        id: i64,
        update: UpdateWorkCategoryRequest,
    ) -> Result<Option<WorkCategory>>;
    // 通过ID获取类别（含要求）
    async fn get_work_category_by_id(&self, id: i64) -> Result<Option<WorkCategory>>;
    // 列出全部类别（含要求，目录规模小，不分页）
    async fn list_work_categories(&self) -> Result<Vec<WorkCategory>>;

    /// 提交管理方法
    // 创建提交聚合（提交 + 满足的要求 + 文件记录，单事务）。
    // strict 为 false 时无效要求键被跳过，为 true 时整个提交被拒绝。
    async fn create_submission(&self, submission: NewSubmission, strict: bool)
    -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 列出提交（带教授与类别信息）
    async fn list_submissions(&self, query: SubmissionListQuery) -> Result<SubmissionListResponse>;
    // 应用一次审核动作（乐观 CAS，前置状态不符则为 no-op）
    async fn apply_review_transition(
        &self,
        id: i64,
        stage: ReviewStage,
        action: ReviewAction,
        action_description: Option<String>,
    ) -> Result<ReviewOutcome>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
