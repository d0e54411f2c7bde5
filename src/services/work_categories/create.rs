use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::WorkCategoryService;
use crate::errors::WorkSystemError;
use crate::models::work_categories::requests::CreateWorkCategoryRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_category_payload;

pub async fn create_work_category(
    service: &WorkCategoryService,
    request: &HttpRequest,
    category_data: CreateWorkCategoryRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_category_payload(
        &category_data.name,
        category_data.max_percentage,
        &category_data.requirements,
    ) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_work_category(category_data).await {
        Ok(category) => {
            info!("Work category '{}' created", category.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                category,
                "Work category created successfully",
            )))
        }
        Err(WorkSystemError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::WorkCategoryAlreadyExists, msg),
        )),
        Err(e) => {
            error!("Failed to create work category: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create work category",
                )),
            )
        }
    }
}
