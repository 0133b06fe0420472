//! 统一错误处理模块
//!
//! 使用宏自动生成错误类别，每个类别带有错误代码、类型名称和 HTTP 状态码。
//! 错误本身携带类别、可读消息以及可选的底层原因。

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};

use crate::models::ApiResponse;

/// 定义错误类别的宏
///
/// 自动生成：
/// - `ErrorKind` enum 定义
/// - code() 方法 - 返回对外暴露的错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status_code() 方法 - 返回对应的 HTTP 状态码
/// - `DashboardError` 的便捷构造函数
macro_rules! define_dashboard_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorKind {
            $($variant,)*
        }

        impl ErrorKind {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ErrorKind::$variant => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ErrorKind::$variant => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(ErrorKind::$variant => StatusCode::$status,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl DashboardError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        DashboardError::new(ErrorKind::$variant, msg)
                    }
                )*
            }
        }
    };
}

define_dashboard_errors! {
    NotFound("NOT_FOUND", "Resource Not Found", NOT_FOUND),
    Unauthorized("UNAUTHORIZED", "Unauthorized", UNAUTHORIZED),
    Forbidden("FORBIDDEN", "Forbidden", FORBIDDEN),
    Validation("VALIDATION", "Validation Error", BAD_REQUEST),
    Conflict("CONFLICT", "Conflict", CONFLICT),
    InternalServerError("INTERNAL_SERVER_ERROR", "Internal Server Error", INTERNAL_SERVER_ERROR),
    DatabaseConfig("INTERNAL_SERVER_ERROR", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("INTERNAL_SERVER_ERROR", "Database Connection Error", INTERNAL_SERVER_ERROR),
}

impl ErrorKind {
    /// 是否为服务端内部错误（消息不直接暴露给调用方）
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

/// 带类别与原因的错误
#[derive(Debug, Clone)]
pub struct DashboardError {
    kind: ErrorKind,
    message: String,
    cause: Option<Arc<dyn StdError + Send + Sync>>,
}

impl DashboardError {
    pub fn new<T: Into<String>>(kind: ErrorKind, msg: T) -> Self {
        Self {
            kind,
            message: msg.into(),
            cause: None,
        }
    }

    /// 附加底层原因
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn error_type(&self) -> &'static str {
        self.kind.error_type()
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// 对调用方可见的消息，内部错误统一替换为通用提示
    pub fn public_message(&self) -> &str {
        if self.kind.is_internal() {
            "An unexpected error occurred"
        } else {
            &self.message
        }
    }

    /// 在原有消息前添加上下文
    pub fn context<T: fmt::Display>(mut self, ctx: T) -> Self {
        self.message = format!("{ctx}: {}", self.message);
        self
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        match &self.cause {
            Some(cause) => format!("{}: {} ({cause})", self.error_type(), self.message),
            None => format!("{}: {}", self.error_type(), self.message),
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl StdError for DashboardError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ApiResponse::error_empty(self.kind, self.public_message()))
    }
}

/// 外键约束失败
///
/// SQLite 的 RESTRICT 删除报扩展码 1811，`sql_err()` 只识别 787，因此再按各数据库的消息文本兜底。
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        return true;
    }
    let text = err.to_string().to_lowercase();
    text.contains("foreign key constraint")
}

// 存储层错误分类：唯一约束 -> Conflict，外键 -> Validation，记录缺失 -> NotFound
impl From<DbErr> for DashboardError {
    fn from(err: DbErr) -> Self {
        let kind = match (&err, err.sql_err()) {
            (DbErr::RecordNotFound(_), _) | (DbErr::RecordNotUpdated, _) => ErrorKind::NotFound,
            (_, Some(SqlErr::UniqueConstraintViolation(_))) => ErrorKind::Conflict,
            _ if is_foreign_key_violation(&err) => ErrorKind::Validation,
            _ => ErrorKind::InternalServerError,
        };
        let message = match kind {
            ErrorKind::NotFound => "Record not found",
            ErrorKind::Conflict => "Record already exists",
            ErrorKind::Validation => "Referenced record does not exist",
            _ => "Database operation failed",
        };
        DashboardError::new(kind, message).with_cause(err)
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::internal_server_error("I/O operation failed").with_cause(err)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::internal_server_error("Serialization failed").with_cause(err)
    }
}

impl From<chrono::ParseError> for DashboardError {
    fn from(err: chrono::ParseError) -> Self {
        DashboardError::validation(format!("Invalid date: {err}")).with_cause(err)
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DashboardError::not_found("test").code(), "NOT_FOUND");
        assert_eq!(DashboardError::unauthorized("test").code(), "UNAUTHORIZED");
        assert_eq!(DashboardError::validation("test").code(), "VALIDATION");
        assert_eq!(
            DashboardError::database_connection("test").code(),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            DashboardError::not_found("x").kind().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DashboardError::conflict("x").kind().status_code(),
            StatusCode::CONFLICT
        );
        assert!(DashboardError::internal_server_error("x").kind().is_internal());
        assert!(!DashboardError::validation("x").kind().is_internal());
    }

    #[test]
    fn test_public_message_hides_internal_details() {
        let err = DashboardError::internal_server_error("connection reset by peer");
        assert_eq!(err.public_message(), "An unexpected error occurred");

        let err = DashboardError::not_found("Class not found");
        assert_eq!(err.public_message(), "Class not found");
    }

    #[test]
    fn test_cause_is_attached() {
        let err = DashboardError::from(DbErr::Custom("boom".to_string()));
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert!(err.source().is_some());
        assert!(err.format_simple().contains("boom"));
    }

    #[test]
    fn test_record_not_found_maps_to_not_found() {
        let err = DashboardError::from(DbErr::RecordNotFound("classes".to_string()));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_foreign_key_message_is_classified() {
        let err = DbErr::Custom("(code: 1811) FOREIGN KEY constraint failed".to_string());
        assert!(is_foreign_key_violation(&err));
        assert_eq!(DashboardError::from(err).kind(), ErrorKind::Validation);

        let err = DbErr::Custom(
            "update or delete on table \"campuses\" violates foreign key constraint".to_string(),
        );
        assert!(is_foreign_key_violation(&err));
        assert!(!is_foreign_key_violation(&DbErr::Custom("disk I/O error".to_string())));
    }

    #[test]
    fn test_context_prefixes_message() {
        let err = DashboardError::not_found("Class not found").context("class.delete");
        assert_eq!(err.message(), "class.delete: Class not found");
    }
}
