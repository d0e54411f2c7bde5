pub mod create;
pub mod export;
pub mod list;
pub mod review;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::entities::{ReviewAction, ReviewStage};
use crate::models::submissions::requests::{ReviewRequest, SubmissionListQuery};
use crate::storage::Storage;

/// 提交列表的四种视图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionView {
    /// 全部提交（管理端总览，可按 query 过滤状态）
    All,
    /// 院系审核队列（PROCESSING）
    Processing,
    /// 终审队列（DEPARTMENT_APPROVED）
    Approved,
    /// 当前教授自己的提交
    Mine,
}

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建提交（multipart：类别、描述与各要求的证明文件）
    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, payload).await
    }

    // 按视图列出提交
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        query: SubmissionListQuery,
        view: SubmissionView,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, query, view).await
    }

    // 应用一次审核动作
    pub async fn review_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        stage: ReviewStage,
        action: ReviewAction,
        review: ReviewRequest,
    ) -> ActixResult<HttpResponse> {
        review::review_submission(self, request, submission_id, stage, action, review).await
    }

    // 导出提交的文件包（ZIP）
    pub async fn export_bundle(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        export::export_bundle(self, request, submission_id).await
    }
}
