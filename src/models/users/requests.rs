use serde::Deserialize;

use super::entities::UserRole;

/// 创建用户请求
///
/// 院系管理员必须携带 `department_name`（将一并创建其管理的院系），
/// 教授必须携带 `department_id`。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub birthdate: Option<String>,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub department_description: Option<String>,
}
