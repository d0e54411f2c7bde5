use serde::Serialize;

use super::entities::Department;

#[derive(Debug, Serialize)]
pub struct DepartmentListResponse {
    pub items: Vec<Department>,
}
