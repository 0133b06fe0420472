/*!
 * 角色守卫
 *
 * 挂在单个路由上，必须位于 RequireJWT 之内：
 *
 * ```rust,ignore
 * web::resource("/class.create").route(
 *     web::post()
 *         .to(create_class)
 *         .wrap(RequireRole::any_of(UserRole::admin_roles())),
 * )
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::errors::ErrorKind;
use crate::models::{auth::Caller, users::entities::UserRole};

use super::create_error_response;

#[derive(Clone, Copy)]
pub struct RequireRole {
    allowed: &'static [UserRole],
}

impl RequireRole {
    pub fn any_of(allowed: &'static [UserRole]) -> Self {
        Self { allowed }
    }

    /// 返回拒绝原因；`None` 表示放行
    fn deny_reason(&self, caller: Option<&Caller>) -> Option<(ErrorKind, &'static str)> {
        match caller {
            Some(caller) if caller.has_any_role(self.allowed) => None,
            Some(caller) => {
                info!(
                    "Access denied for user {} (role: {}), allowed: {:?}",
                    caller.user_id, caller.role, self.allowed
                );
                Some((ErrorKind::Forbidden, "Access denied"))
            }
            None => {
                info!("Role check without an authenticated caller");
                Some((ErrorKind::Unauthorized, "Authentication required"))
            }
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            guard: *self,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    guard: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_service::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let denied = self
            .guard
            .deny_reason(req.extensions().get::<Caller>());

        Box::pin(async move {
            match denied {
                None => Ok(srv.call(req).await?.map_into_left_body()),
                Some((kind, message)) => Ok(req.into_response(
                    create_error_response(kind, message).map_into_right_body(),
                )),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(role: UserRole) -> Caller {
        Caller {
            user_id: 7,
            username: "someone".to_string(),
            role,
        }
    }

    #[test]
    fn test_staff_guard() {
        let guard = RequireRole::any_of(UserRole::staff_roles());
        assert!(guard.deny_reason(Some(&caller(UserRole::Teacher))).is_none());
        assert!(guard.deny_reason(Some(&caller(UserRole::Admin))).is_none());
        assert_eq!(
            guard
                .deny_reason(Some(&caller(UserRole::Student)))
                .map(|(kind, _)| kind),
            Some(ErrorKind::Forbidden)
        );
        assert_eq!(
            guard.deny_reason(None).map(|(kind, _)| kind),
            Some(ErrorKind::Unauthorized)
        );
    }
}
