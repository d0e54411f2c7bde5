use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::errors::WorkSystemError;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::{NewSubmission, SubmissionFileEntry};
use crate::models::{ApiResponse, ErrorCode};

const REQUIREMENT_FIELD_PREFIX: &str = "requirement_";

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    let professor_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "Unauthorized: missing user id",
                )),
            );
        }
    };

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", WorkSystemError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    let mut category_id: Option<i64> = None;
    let mut description: Option<String> = None;
    let mut files: Vec<SubmissionFileEntry> = Vec::new();
    // 已落盘的文件，出错时全部清理
    let mut written_paths: Vec<String> = Vec::new();

    let cleanup = |paths: &[String]| {
        for path in paths {
            let _ = fs::remove_file(path);
        }
    };

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "category_id" {
            let text = match read_text_field(&mut field).await {
                Ok(text) => text,
                Err(e) => {
                    cleanup(&written_paths);
                    return Err(e);
                }
            };
            match text.trim().parse::<i64>() {
                Ok(id) => category_id = Some(id),
                Err(_) => {
                    cleanup(&written_paths);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        "category_id must be an integer",
                    )));
                }
            }
        } else if name == "description" {
            let text = match read_text_field(&mut field).await {
                Ok(text) => text,
                Err(e) => {
                    cleanup(&written_paths);
                    return Err(e);
                }
            };
            if !text.trim().is_empty() {
                description = Some(text);
            }
        } else if let Some(raw_id) = name.strip_prefix(REQUIREMENT_FIELD_PREFIX) {
            let requirement_id = match raw_id.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    cleanup(&written_paths);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        format!("Malformed requirement field name: {name}"),
                    )));
                }
            };

            let original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();
            if original_name.is_empty() {
                cleanup(&written_paths);
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!("Field {name} carries no file"),
                )));
            }

            // 扩展名白名单校验
            let extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();
            if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                cleanup(&written_paths);
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                )));
            }

            let stored_name = format!("{}-{}.bin", chrono::Utc::now().timestamp(), Uuid::new_v4());
            let file_path = format!("{upload_dir}/{stored_name}");
            let mut f = match File::create(&file_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", WorkSystemError::file_operation(format!("{e}")));
                    cleanup(&written_paths);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                    ));
                }
            };
            written_paths.push(file_path.clone());

            let mut total_size: usize = 0;
            while let Some(chunk) = field.next().await {
                // 客户端中断或写盘失败时同样不能留下孤儿文件
                let data = match chunk {
                    Ok(data) => data,
                    Err(e) => {
                        cleanup(&written_paths);
                        return Err(e.into());
                    }
                };
                total_size += data.len();
                if total_size > max_size {
                    cleanup(&written_paths);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                if let Err(e) = f.write_all(&data) {
                    cleanup(&written_paths);
                    return Err(e.into());
                }
            }

            files.push(SubmissionFileEntry {
                requirement_id,
                original_name,
                stored_name,
            });
        }
    }

    let Some(work_category_id) = category_id else {
        cleanup(&written_paths);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "category_id is required",
        )));
    };

    if files.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No requirement files found in upload payload",
        )));
    }

    let storage = service.get_storage(request);
    let strict = AppConfig::get().submission.strict_requirements;

    let new = NewSubmission {
        professor_id,
        work_category_id,
        submission_description: description,
        files,
    };

    match storage.create_submission(new, strict).await {
        Ok(submission) => {
            // 宽松模式下被跳过的文件不会入库，清理其落盘副本
            let kept: std::collections::HashSet<&str> = submission
                .files
                .iter()
                .map(|f| f.stored_name.as_str())
                .collect();
            for path in &written_paths {
                let orphaned = Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| !kept.contains(n))
                    .unwrap_or(false);
                if orphaned {
                    let _ = fs::remove_file(path);
                }
            }
            tracing::info!(
                "Submission {} created by professor {} for category {}",
                submission.id,
                professor_id,
                work_category_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                submission,
                "Submission created successfully",
            )))
        }
        Err(WorkSystemError::NotFound(msg)) => {
            cleanup(&written_paths);
            Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::WorkCategoryNotFound, msg)))
        }
        Err(WorkSystemError::Validation(msg)) => {
            cleanup(&written_paths);
            let code = if msg.contains("requirement keys") {
                ErrorCode::InvalidRequirementKey
            } else {
                ErrorCode::ValidationFailed
            };
            Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(code, msg)))
        }
        Err(e) => {
            cleanup(&written_paths);
            tracing::error!("Failed to create submission: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create submission",
                )),
            )
        }
    }
}

async fn read_text_field(field: &mut actix_multipart::Field) -> ActixResult<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
