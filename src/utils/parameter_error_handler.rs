//! 请求参数解析失败时统一返回 VALIDATION 响应

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest};
use tracing::debug;

use crate::errors::DashboardError;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejected JSON body for {}: {}", req.path(), err);
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        _ => format!("Invalid request body: {err}"),
    };
    DashboardError::validation(message).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejected query string for {}: {}", req.path(), err);
    DashboardError::validation(format!("Invalid query parameters: {err}")).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Rejected path parameters for {}: {}", req.path(), err);
    DashboardError::validation(format!("Invalid path parameters: {err}")).into()
}
