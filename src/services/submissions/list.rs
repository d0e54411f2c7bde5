use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{SubmissionService, SubmissionView};
use crate::errors::WorkSystemError;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::submissions::requests::SubmissionListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    mut query: SubmissionListQuery,
    view: SubmissionView,
) -> ActixResult<HttpResponse> {
    // 视图决定过滤条件，客户端无法越权改写
    match view {
        SubmissionView::All => {
            query.professor_id = None;
        }
        SubmissionView::Processing => {
            query.status = Some(SubmissionStatus::PROCESSING.to_string());
            query.professor_id = None;
        }
        SubmissionView::Approved => {
            query.status = Some(SubmissionStatus::DEPARTMENT_APPROVED.to_string());
            query.professor_id = None;
        }
        SubmissionView::Mine => {
            let professor_id = match RequireJWT::extract_user_id(request) {
                Some(id) => id,
                None => {
                    return Ok(HttpResponse::Unauthorized().json(
                        ApiResponse::<()>::error_empty(
                            ErrorCode::Unauthorized,
                            "Unauthorized: missing user id",
                        ),
                    ));
                }
            };
            query.professor_id = Some(professor_id);
        }
    }

    let storage = service.get_storage(request);

    match storage.list_submissions(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Submissions retrieved successfully",
        ))),
        Err(WorkSystemError::Validation(msg)) => Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))),
        Err(e) => {
            error!("Failed to list submissions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list submissions",
                )),
            )
        }
    }
}
