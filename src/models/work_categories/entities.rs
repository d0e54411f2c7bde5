use serde::{Deserialize, Serialize};

/// 工作类别（可申报的职业发展活动类型，带总涨幅上限）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// 该类别可申报的总百分比上限
    pub max_percentage: i32,
    pub requirements: Vec<Requirement>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 要求（工作类别下的一项证明条件，带单项涨幅上限）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub id: i64,
    pub work_category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub max_percentage_increase: i32,
}
