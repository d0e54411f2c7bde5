use serde::Deserialize;

use crate::models::PaginationQuery;

/// 提交列表查询参数
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SubmissionListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// 按状态过滤（列表视图路由决定默认值）
    pub status: Option<String>,
    /// 按教授过滤（"我的提交"视图由中间件注入）
    pub professor_id: Option<i64>,
}

/// 审核请求体（可选备注）
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReviewRequest {
    pub action_description: Option<String>,
}

/// 已落盘的上传文件，待随提交一并入库
#[derive(Debug, Clone)]
pub struct SubmissionFileEntry {
    /// 上传字段声明的目标要求
    pub requirement_id: i64,
    pub original_name: String,
    pub stored_name: String,
}

/// 创建提交的完整载荷（multipart 解析之后）
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub professor_id: i64,
    pub work_category_id: i64,
    pub submission_description: Option<String>,
    pub files: Vec<SubmissionFileEntry>,
}
