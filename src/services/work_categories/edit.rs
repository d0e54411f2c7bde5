use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::WorkCategoryService;
use crate::errors::WorkSystemError;
use crate::models::work_categories::requests::UpdateWorkCategoryRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_category_payload;

pub async fn update_work_category(
    service: &WorkCategoryService,
    request: &HttpRequest,
    category_id: i64,
    update_data: UpdateWorkCategoryRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_category_payload(
        &update_data.name,
        update_data.max_percentage,
        &update_data.requirements,
    ) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_work_category(category_id, update_data).await {
        Ok(Some(category)) => {
            info!("Work category {} updated", category_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                category,
                "Work category updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::WorkCategoryNotFound,
            "Work category not found",
        ))),
        Err(WorkSystemError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::WorkCategoryAlreadyExists, msg),
        )),
        Err(e) => {
            error!("Failed to update work category {}: {}", category_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update work category",
                )),
            )
        }
    }
}
