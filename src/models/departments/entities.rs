use serde::{Deserialize, Serialize};

/// 院系
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// 院系管理员（可为空，管理员被删除时置空）
    pub admin_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
