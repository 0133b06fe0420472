use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{admin_only, respond, respond_empty};
use crate::middlewares::RequestContext;
use crate::models::common::IdRequest;
use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest,
};

pub async fn create_teacher(
    ctx: RequestContext,
    body: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "teacher.create",
        ctx.teachers().create(body.into_inner()).await,
        "Teacher created successfully",
    )
}

pub async fn list_teachers(
    ctx: RequestContext,
    body: web::Json<TeacherListQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "teacher.list",
        ctx.teachers().list(body.into_inner()).await,
        "Teachers retrieved successfully",
    )
}

pub async fn get_teacher(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "teacher.get",
        ctx.teachers().get(body.id).await,
        "Teacher retrieved successfully",
    )
}

// 提供 profile 时整体替换（不存在则创建）
pub async fn update_teacher(
    ctx: RequestContext,
    body: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "teacher.update",
        ctx.teachers().update(body.into_inner()).await,
        "Teacher updated successfully",
    )
}

pub async fn delete_teacher(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "teacher.delete",
        ctx.teachers().delete(body.id).await,
        "Teacher deleted successfully",
    )
}

pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/teacher.list").route(web::post().to(list_teachers)))
        .service(web::resource("/teacher.get").route(web::post().to(get_teacher)))
        .service(
            web::resource("/teacher.create")
                .route(web::post().to(create_teacher).wrap(admin_only())),
        )
        .service(
            web::resource("/teacher.update")
                .route(web::post().to(update_teacher).wrap(admin_only())),
        )
        .service(
            web::resource("/teacher.delete")
                .route(web::post().to(delete_teacher).wrap(admin_only())),
        );
}
