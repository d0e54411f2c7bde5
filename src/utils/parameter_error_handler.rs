use actix_web::{HttpRequest, HttpResponse, error::Error};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败时的统一错误响应
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid JSON payload: {err}"),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// 查询参数解析失败时的统一错误响应
pub fn query_error_handler(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {err}"),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// 路径参数解析失败时的统一错误响应
pub fn path_error_handler(err: actix_web::error::PathError, _req: &HttpRequest) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameters: {err}"),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}
