use std::collections::HashMap;
use std::path::Path;

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::{build_bundle, bundle_entry_name, slugify};

/// 导出一次提交的全部证明文件为 ZIP 包
///
/// 全有或全无：任何一个文件缺失或不可读，导出失败，不产出部分归档。
pub async fn export_bundle(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            error!("Failed to load submission {}: {}", submission_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load submission",
                )),
            );
        }
    };

    let category = match storage
        .get_work_category_by_id(submission.work_category_id)
        .await
    {
        Ok(Some(category)) => category,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::WorkCategoryNotFound,
                "Work category of this submission no longer exists",
            )));
        }
        Err(e) => {
            error!("Failed to load work category: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load work category",
                )),
            );
        }
    };

    let requirement_names: HashMap<i64, &str> = category
        .requirements
        .iter()
        .map(|r| (r.id, r.name.as_str()))
        .collect();

    let upload_dir = &AppConfig::get().upload.dir;
    let mut entries = Vec::with_capacity(submission.files.len());
    for file in &submission.files {
        let path = Path::new(upload_dir).join(&file.stored_name);
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(e) => {
                error!(
                    "Missing stored file {} for submission {}: {}",
                    file.stored_name, submission_id, e
                );
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::ExportFailed,
                        "A stored file of this submission is missing",
                    )),
                );
            }
        };
        let requirement_name = requirement_names
            .get(&file.requirement_id)
            .copied()
            .unwrap_or("requirement");
        entries.push((
            bundle_entry_name(requirement_name, file.id, &file.original_name),
            data,
        ));
    }

    let bundle = match build_bundle(entries) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to build bundle for submission {}: {}", submission_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    "Failed to build the file bundle",
                )),
            );
        }
    };

    let filename = format!("{}-{}.zip", slugify(&category.name), submission.id);

    Ok(HttpResponse::Ok()
        .content_type("application/zip")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(bundle))
}
