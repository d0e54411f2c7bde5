use serde::Deserialize;

/// 嵌套的要求载荷（创建/编辑类别时一并提交）
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementPayload {
    pub name: String,
    pub description: Option<String>,
    pub max_percentage_increase: i32,
}

/// 创建工作类别请求（类别 + 嵌套要求，原子落库）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub max_percentage: i32,
    pub requirements: Vec<RequirementPayload>,
}

/// 编辑工作类别请求
///
/// 嵌套的要求集合整体重写：全部成功或整个编辑被拒绝。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub max_percentage: i32,
    pub requirements: Vec<RequirementPayload>,
}
