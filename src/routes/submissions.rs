use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Action};
use crate::models::submissions::entities::{ReviewAction, ReviewStage};
use crate::models::submissions::requests::{ReviewRequest, SubmissionListQuery};
use crate::services::{SubmissionService, SubmissionView};

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// HTTP处理程序
pub async fn create_submission(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.create_submission(&req, payload).await
}

pub async fn list_all(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner(), SubmissionView::All)
        .await
}

pub async fn list_processing(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner(), SubmissionView::Processing)
        .await
}

pub async fn list_approved(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner(), SubmissionView::Approved)
        .await
}

pub async fn list_my(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner(), SubmissionView::Mine)
        .await
}

pub async fn download_bundle(
    req: HttpRequest,
    submission_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .export_bundle(&req, submission_id.into_inner())
        .await
}

async fn review(
    req: HttpRequest,
    submission_id: i64,
    stage: ReviewStage,
    action: ReviewAction,
    body: Option<web::Json<ReviewRequest>>,
) -> ActixResult<HttpResponse> {
    let review = body.map(|b| b.into_inner()).unwrap_or_default();
    SUBMISSION_SERVICE
        .review_submission(&req, submission_id, stage, action, review)
        .await
}

pub async fn department_approve(
    req: HttpRequest,
    submission_id: web::Path<i64>,
    body: Option<web::Json<ReviewRequest>>,
) -> ActixResult<HttpResponse> {
    review(
        req,
        submission_id.into_inner(),
        ReviewStage::Department,
        ReviewAction::Approve,
        body,
    )
    .await
}

pub async fn department_decline(
    req: HttpRequest,
    submission_id: web::Path<i64>,
    body: Option<web::Json<ReviewRequest>>,
) -> ActixResult<HttpResponse> {
    review(
        req,
        submission_id.into_inner(),
        ReviewStage::Department,
        ReviewAction::Decline,
        body,
    )
    .await
}

pub async fn super_approve(
    req: HttpRequest,
    submission_id: web::Path<i64>,
    body: Option<web::Json<ReviewRequest>>,
) -> ActixResult<HttpResponse> {
    review(
        req,
        submission_id.into_inner(),
        ReviewStage::Super,
        ReviewAction::Approve,
        body,
    )
    .await
}

pub async fn super_decline(
    req: HttpRequest,
    submission_id: web::Path<i64>,
    body: Option<web::Json<ReviewRequest>>,
) -> ActixResult<HttpResponse> {
    review(
        req,
        submission_id.into_inner(),
        ReviewStage::Super,
        ReviewAction::Decline,
        body,
    )
    .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(create_submission)
                            // 仅教授提交工作证明
                            .wrap(middlewares::RequireRole::for_action(
                                Action::CreateSubmission,
                            )),
                    )
                    .route(
                        // 管理端总览
                        web::get()
                            .to(list_all)
                            .wrap(middlewares::RequireRole::for_action(
                                Action::ViewAllSubmissions,
                            )),
                    ),
            )
            .service(
                // 院系审核队列
                web::resource("/processing").route(
                    web::get()
                        .to(list_processing)
                        .wrap(middlewares::RequireRole::for_action(
                            Action::ViewAllSubmissions,
                        )),
                ),
            )
            .service(
                // 终审队列
                web::resource("/approved").route(
                    web::get()
                        .to(list_approved)
                        .wrap(middlewares::RequireRole::for_action(
                            Action::ViewAllSubmissions,
                        )),
                ),
            )
            .service(
                web::resource("/my").route(
                    web::get()
                        .to(list_my)
                        .wrap(middlewares::RequireRole::for_action(
                            Action::ViewOwnSubmissions,
                        )),
                ),
            )
            .service(
                web::resource("/approved/{submission_id}/approve").route(
                    web::post()
                        .to(super_approve)
                        .wrap(middlewares::RequireRole::for_action(Action::ReviewSuper)),
                ),
            )
            .service(
                web::resource("/approved/{submission_id}/decline").route(
                    web::post()
                        .to(super_decline)
                        .wrap(middlewares::RequireRole::for_action(Action::ReviewSuper)),
                ),
            )
            .service(
                web::resource("/{submission_id}/download").route(
                    web::get()
                        .to(download_bundle)
                        .wrap(middlewares::RequireRole::for_action(Action::DownloadBundle)),
                ),
            )
            .service(
                web::resource("/{submission_id}/approve").route(
                    web::post()
                        .to(department_approve)
                        .wrap(middlewares::RequireRole::for_action(
                            Action::ReviewDepartment,
                        )),
                ),
            )
            .service(
                web::resource("/{submission_id}/decline").route(
                    web::post()
                        .to(department_decline)
                        .wrap(middlewares::RequireRole::for_action(
                            Action::ReviewDepartment,
                        )),
                ),
            ),
    );
}
