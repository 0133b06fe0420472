pub mod request_context;
pub mod require_jwt;
pub mod require_role;

use actix_web::{HttpResponse, http::StatusCode};

use crate::errors::ErrorKind;
use crate::models::ApiResponse;

pub use request_context::RequestContext;
pub use require_jwt::RequireJWT;
pub use require_role::RequireRole;

// 中间件拒绝请求时使用的统一响应
pub(crate) fn create_error_response(kind: ErrorKind, message: &str) -> HttpResponse {
    let status: StatusCode = kind.status_code();
    HttpResponse::build(status).json(ApiResponse::error_empty(kind, message))
}
