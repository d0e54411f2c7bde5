//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_worksystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum WorkSystemError {
            $($variant(String),)*
        }

        impl WorkSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(WorkSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(WorkSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(WorkSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl WorkSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        WorkSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_worksystem_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
    ExportFailure("E011", "Export Failure"),
    Conflict("E012", "Resource Conflict"),
}

impl WorkSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for WorkSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for WorkSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for WorkSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        WorkSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for WorkSystemError {
    fn from(err: std::io::Error) -> Self {
        WorkSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for WorkSystemError {
    fn from(err: serde_json::Error) -> Self {
        WorkSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for WorkSystemError {
    fn from(err: chrono::ParseError) -> Self {
        WorkSystemError::DateParse(err.to_string())
    }
}

impl From<zip::result::ZipError> for WorkSystemError {
    fn from(err: zip::result::ZipError) -> Self {
        WorkSystemError::ExportFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WorkSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(WorkSystemError::database_config("test").code(), "E001");
        assert_eq!(WorkSystemError::validation("test").code(), "E005");
        assert_eq!(WorkSystemError::not_found("test").code(), "E006");
        assert_eq!(WorkSystemError::export_failure("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            WorkSystemError::authorization("test").error_type(),
            "Authorization Error"
        );
        assert_eq!(
            WorkSystemError::export_failure("test").error_type(),
            "Export Failure"
        );
    }

    #[test]
    fn test_error_message() {
        let err = WorkSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = WorkSystemError::not_found("Work category 42 not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("42"));
    }
}
