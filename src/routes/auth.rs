use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use super::{admin_only, respond};
use crate::errors::DashboardError;
use crate::middlewares::RequestContext;
use crate::models::auth::LoginRequest;
use crate::models::users::requests::CreateUserRequest;
use crate::services::AuthService;
use crate::storage::Storage;

pub async fn login(
    storage: Option<web::Data<Arc<dyn Storage>>>,
    body: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let result = match storage {
        Some(storage) => {
            AuthService::new(storage.get_ref().clone())
                .login(body.into_inner())
                .await
        }
        None => Err(DashboardError::internal_server_error("Storage not configured")),
    };
    respond("auth.login", result, "Login successful")
}

pub async fn me(ctx: RequestContext) -> ActixResult<HttpResponse> {
    respond("auth.me", Ok(ctx.caller.clone()), "Caller retrieved successfully")
}

pub async fn create_user(
    ctx: RequestContext,
    body: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "user.create",
        ctx.auth().create_user(body.into_inner()).await,
        "User created successfully",
    )
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth.me").route(web::post().to(me)))
        .service(
            web::resource("/user.create")
                .route(web::post().to(create_user).wrap(admin_only())),
        );
}
