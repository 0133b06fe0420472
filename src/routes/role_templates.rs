use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{admin_only, respond, respond_empty};
use crate::middlewares::RequestContext;
use crate::models::common::IdRequest;
use crate::models::role_templates::requests::CreateRoleTemplateRequest;

pub async fn create_template(
    ctx: RequestContext,
    body: web::Json<CreateRoleTemplateRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "roleTemplate.create",
        ctx.role_templates().create(body.into_inner()).await,
        "Role template created successfully",
    )
}

pub async fn list_templates(ctx: RequestContext) -> ActixResult<HttpResponse> {
    respond(
        "roleTemplate.list",
        ctx.role_templates().list().await,
        "Role templates retrieved successfully",
    )
}

pub async fn get_template(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "roleTemplate.get",
        ctx.role_templates().get(body.id).await,
        "Role template retrieved successfully",
    )
}

pub async fn delete_template(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "roleTemplate.delete",
        ctx.role_templates().delete(body.id).await,
        "Role template deleted successfully",
    )
}

// 角色模板整体仅管理员可用
pub fn configure_role_template_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/roleTemplate.create")
            .route(web::post().to(create_template).wrap(admin_only())),
    )
    .service(
        web::resource("/roleTemplate.list").route(web::post().to(list_templates).wrap(admin_only())),
    )
    .service(
        web::resource("/roleTemplate.get").route(web::post().to(get_template).wrap(admin_only())),
    )
    .service(
        web::resource("/roleTemplate.delete")
            .route(web::post().to(delete_template).wrap(admin_only())),
    );
}
