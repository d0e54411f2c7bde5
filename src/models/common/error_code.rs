//! 业务错误码
//!
//! 与 HTTP 状态码解耦的细分错误码，随 `ApiResponse` 一同返回。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 4xx 请求方错误
    BadRequest = 40000,
    Unauthorized = 40100,
    Forbidden = 40300,
    NotFound = 40400,
    UserNotFound = 40401,
    WorkCategoryNotFound = 40402,
    RequirementNotFound = 40403,
    SubmissionNotFound = 40404,
    FileNotFound = 40405,
    DepartmentNotFound = 40406,
    UserAlreadyExists = 40901,
    WorkCategoryAlreadyExists = 40902,
    DepartmentAlreadyExists = 40903,
    ValidationFailed = 42200,
    InvalidRequirementKey = 42201,
    FileTypeNotAllowed = 42202,
    FileSizeExceeded = 42203,

    // 5xx 服务端错误
    InternalServerError = 50000,
    FileUploadFailed = 50001,
    ExportFailed = 50002,
    UserCreationFailed = 50003,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Forbidden as i32, 40300);
        assert_eq!(ErrorCode::SubmissionNotFound as i32, 40404);
        assert_eq!(ErrorCode::ExportFailed as i32, 50002);
    }
}
