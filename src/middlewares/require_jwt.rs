/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <token>`，解析出调用者并写入请求扩展，
 * 供 [`RequestContext`](super::RequestContext) 与 [`RequireRole`](super::RequireRole) 使用。
 *
 * ```rust,ignore
 * web::scope("/api/v1/rpc")
 *     .wrap(RequireJWT)
 *     .route("/class.list", web::post().to(list_classes))
 * ```
 *
 * 调用者身份按 token 缓存在会话缓存中，缓存未命中时回源到存储层并检查账户状态。
 */

use crate::cache::{self, SessionCache};
use crate::errors::{DashboardError, ErrorKind, Result};
use crate::models::auth::Caller;
use crate::storage::Storage;
use crate::utils::jwt::TokenIssuer;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::AUTHORIZATION,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct RequireJWT;

fn session_key(token: &str) -> String {
    format!("session:{token}")
}

// 提取并验证 access token，返回调用者身份
async fn resolve_caller(req: &ServiceRequest) -> Result<Caller> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| DashboardError::unauthorized("Missing or invalid Authorization header"))?;

    let claims = TokenIssuer::global().verify(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        DashboardError::unauthorized("Invalid access token").with_cause(err)
    })?;

    let cache = req
        .app_data::<web::Data<Arc<dyn SessionCache>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| DashboardError::internal_server_error("Session cache not configured"))?;

    if let Some(caller) = cache::get_json::<Caller>(cache.as_ref(), &session_key(token)).await {
        return Ok(caller);
    }

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| DashboardError::internal_server_error("Storage not configured"))?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| DashboardError::unauthorized("Invalid user ID in access token"))?;

    let user = storage
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| DashboardError::unauthorized("User not found"))?;

    if !user.is_active() {
        return Err(DashboardError::unauthorized("User is not active"));
    }

    let caller = Caller::from(&user);
    cache::insert_json(cache.as_ref(), session_key(token), &caller).await;

    Ok(caller)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::result::Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            match resolve_caller(&req).await {
                Ok(caller) => {
                    debug!("JWT authentication successful for user {}", caller.user_id);
                    req.extensions_mut().insert(caller);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    // 存储或配置故障保留内部错误类别，其余一律视为未认证
                    let kind = if err.kind().is_internal() {
                        err.kind()
                    } else {
                        ErrorKind::Unauthorized
                    };
                    Ok(req.into_response(
                        create_error_response(kind, err.public_message()).map_into_right_body(),
                    ))
                }
            }
        })
    }
}

