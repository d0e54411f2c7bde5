use serde::Serialize;

use super::entities::WorkCategory;

/// 工作类别列表（目录量级小，不分页，要求集合已预取）
#[derive(Debug, Serialize)]
pub struct WorkCategoryListResponse {
    pub items: Vec<WorkCategory>,
}
