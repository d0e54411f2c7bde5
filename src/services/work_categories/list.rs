use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::WorkCategoryService;
use crate::models::work_categories::responses::WorkCategoryListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_work_categories(
    service: &WorkCategoryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_work_categories().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            WorkCategoryListResponse { items },
            "Work categories retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list work categories: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list work categories",
                )),
            )
        }
    }
}

pub async fn get_work_category(
    service: &WorkCategoryService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_work_category_by_id(category_id).await {
        Ok(Some(category)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            category,
            "Work category retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::WorkCategoryNotFound,
            "Work category not found",
        ))),
        Err(e) => {
            error!("Failed to get work category {}: {}", category_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get work category",
                )),
            )
        }
    }
}
