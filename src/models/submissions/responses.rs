use serde::Serialize;

use super::entities::{FileSubmission, SubmissionStatus};
use crate::models::PaginatedResponse;

/// 列表视图中的教授摘要
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionProfessor {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

/// 提交列表条目
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListItem {
    pub id: i64,
    pub professor: SubmissionProfessor,
    pub work_category_id: i64,
    pub work_category_name: String,
    pub status: SubmissionStatus,
    pub submission_description: Option<String>,
    pub action_description: Option<String>,
    pub fulfilled_requirement_ids: Vec<i64>,
    pub files: Vec<FileSubmission>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub type SubmissionListResponse = PaginatedResponse<SubmissionListItem>;

/// 审核动作的响应体
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub status: SubmissionStatus,
    /// 本次动作是否确实变更了状态
    pub changed: bool,
}
