use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{admin_only, respond, respond_empty};
use crate::middlewares::RequestContext;
use crate::models::class_groups::requests::{
    ClassGroupListQuery, CreateClassGroupRequest, UpdateClassGroupRequest,
};
use crate::models::common::IdRequest;

pub async fn create_class_group(
    ctx: RequestContext,
    body: web::Json<CreateClassGroupRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "classGroup.create",
        ctx.class_groups().create(body.into_inner()).await,
        "Class group created successfully",
    )
}

pub async fn list_class_groups(
    ctx: RequestContext,
    body: web::Json<ClassGroupListQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "classGroup.list",
        ctx.class_groups().list(body.into_inner()).await,
        "Class groups retrieved successfully",
    )
}

pub async fn get_class_group(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "classGroup.get",
        ctx.class_groups().get(body.id).await,
        "Class group retrieved successfully",
    )
}

pub async fn update_class_group(
    ctx: RequestContext,
    body: web::Json<UpdateClassGroupRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "classGroup.update",
        ctx.class_groups().update(body.into_inner()).await,
        "Class group updated successfully",
    )
}

pub async fn delete_class_group(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "classGroup.delete",
        ctx.class_groups().delete(body.id).await,
        "Class group deleted successfully",
    )
}

pub fn configure_class_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/classGroup.list").route(web::post().to(list_class_groups)))
        .service(web::resource("/classGroup.get").route(web::post().to(get_class_group)))
        .service(
            web::resource("/classGroup.create")
                .route(web::post().to(create_class_group).wrap(admin_only())),
        )
        .service(
            web::resource("/classGroup.update")
                .route(web::post().to(update_class_group).wrap(admin_only())),
        )
        .service(
            web::resource("/classGroup.delete")
                .route(web::post().to(delete_class_group).wrap(admin_only())),
        );
}
