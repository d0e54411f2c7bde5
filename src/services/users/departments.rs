use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::departments::responses::DepartmentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_departments(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentListResponse { items },
            "Departments retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list departments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list departments",
                )),
            )
        }
    }
}
