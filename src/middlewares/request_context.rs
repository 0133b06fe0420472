//! 每个请求的显式上下文：调用者身份与存储句柄
//!
//! 处理函数通过提取器拿到上下文，不依赖任何全局会话状态。

use std::sync::Arc;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};

use crate::errors::DashboardError;
use crate::models::auth::Caller;
use crate::services::gradebooks::GradebookService;
use crate::storage::Storage;

#[derive(Clone)]
pub struct RequestContext {
    pub caller: Caller,
    pub storage: Arc<dyn Storage>,
    pub gradebooks: Arc<GradebookService>,
}

impl RequestContext {
    pub fn new(
        caller: Caller,
        storage: Arc<dyn Storage>,
        gradebooks: Arc<GradebookService>,
    ) -> Self {
        Self {
            caller,
            storage,
            gradebooks,
        }
    }

    fn from_request_parts(req: &HttpRequest) -> Result<Self, DashboardError> {
        let caller = req
            .extensions()
            .get::<Caller>()
            .cloned()
            .ok_or_else(|| DashboardError::unauthorized("Authentication required"))?;

        let storage = req
            .app_data::<web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| DashboardError::internal_server_error("Storage not configured"))?;

        let gradebooks = req
            .app_data::<web::Data<Arc<GradebookService>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                DashboardError::internal_server_error("Gradebook service not configured")
            })?;

        Ok(Self::new(caller, storage, gradebooks))
    }
}

impl FromRequest for RequestContext {
    type Error = DashboardError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_request_parts(req))
    }
}
