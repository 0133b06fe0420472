use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{admin_only, respond, respond_empty};
use crate::middlewares::RequestContext;
use crate::models::common::{ClassIdRequest, IdRequest};
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest,
};

pub async fn create_subject(
    ctx: RequestContext,
    body: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "subject.create",
        ctx.subjects().create(body.into_inner()).await,
        "Subject created successfully",
    )
}

pub async fn list_subjects(
    ctx: RequestContext,
    body: web::Json<SubjectListQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "subject.list",
        ctx.subjects().list(body.into_inner()).await,
        "Subjects retrieved successfully",
    )
}

pub async fn get_subject(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "subject.get",
        ctx.subjects().get(body.id).await,
        "Subject retrieved successfully",
    )
}

pub async fn update_subject(
    ctx: RequestContext,
    body: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "subject.update",
        ctx.subjects().update(body.into_inner()).await,
        "Subject updated successfully",
    )
}

pub async fn delete_subject(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "subject.delete",
        ctx.subjects().delete(body.id).await,
        "Subject deleted successfully",
    )
}

pub async fn list_subjects_by_class(
    ctx: RequestContext,
    body: web::Json<ClassIdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "subject.listByClass",
        ctx.subjects().list_by_class(body.class_id).await,
        "Subjects retrieved successfully",
    )
}

pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/subject.list").route(web::post().to(list_subjects)))
        .service(web::resource("/subject.get").route(web::post().to(get_subject)))
        .service(web::resource("/subject.listByClass").route(web::post().to(list_subjects_by_class)))
        .service(
            web::resource("/subject.create")
                .route(web::post().to(create_subject).wrap(admin_only())),
        )
        .service(
            web::resource("/subject.update")
                .route(web::post().to(update_subject).wrap(admin_only())),
        )
        .service(
            web::resource("/subject.delete")
                .route(web::post().to(delete_subject).wrap(admin_only())),
        );
}
