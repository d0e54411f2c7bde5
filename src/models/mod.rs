//! 业务数据模型
//!
//! 与数据库实体（`entity` 模块）分离的对外模型，按领域划分，
//! 每个领域下分 `entities` / `requests` / `responses`。

pub mod common;
pub mod departments;
pub mod submissions;
pub mod users;
pub mod work_categories;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间（用于统计预处理耗时）
#[derive(Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
