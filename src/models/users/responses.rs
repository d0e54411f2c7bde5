use serde::Serialize;

use super::entities::{User, UserProfile};

/// 用户创建响应（含档案，档案与用户同事务落库）
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: User,
    pub profile: UserProfile,
}
