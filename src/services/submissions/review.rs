use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::errors::WorkSystemError;
use crate::models::submissions::entities::{ReviewAction, ReviewOutcome, ReviewStage};
use crate::models::submissions::requests::ReviewRequest;
use crate::models::submissions::responses::ReviewResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn review_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    stage: ReviewStage,
    action: ReviewAction,
    review: ReviewRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .apply_review_transition(submission_id, stage, action, review.action_description)
        .await
    {
        Ok(ReviewOutcome::Applied(status)) => {
            info!(
                "Submission {} moved to {} ({:?} {:?})",
                submission_id, status, stage, action
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReviewResponse {
                    id: submission_id,
                    status,
                    changed: true,
                },
                "Review applied successfully",
            )))
        }
        // 前置状态不符（重放或并发竞争），静默保持现状
        Ok(ReviewOutcome::NoOp(status)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReviewResponse {
                id: submission_id,
                status,
                changed: false,
            },
            "Submission unchanged",
        ))),
        Err(WorkSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::SubmissionNotFound, msg))),
        Err(e) => {
            error!("Failed to review submission {}: {}", submission_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to review submission",
                )),
            )
        }
    }
}
