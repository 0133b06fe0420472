use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{admin_only, respond, respond_empty};
use crate::middlewares::RequestContext;
use crate::models::common::IdRequest;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListQuery, UpdateStudentRequest,
};

pub async fn create_student(
    ctx: RequestContext,
    body: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "student.create",
        ctx.students().create(body.into_inner()).await,
        "Student created successfully",
    )
}

pub async fn list_students(
    ctx: RequestContext,
    body: web::Json<StudentListQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "student.list",
        ctx.students().list(body.into_inner()).await,
        "Students retrieved successfully",
    )
}

pub async fn get_student(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "student.get",
        ctx.students().get(body.id).await,
        "Student retrieved successfully",
    )
}

pub async fn update_student(
    ctx: RequestContext,
    body: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "student.update",
        ctx.students().update(body.into_inner()).await,
        "Student updated successfully",
    )
}

pub async fn delete_student(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "student.delete",
        ctx.students().delete(body.id).await,
        "Student deleted successfully",
    )
}

pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/student.list").route(web::post().to(list_students)))
        .service(web::resource("/student.get").route(web::post().to(get_student)))
        .service(
            web::resource("/student.create")
                .route(web::post().to(create_student).wrap(admin_only())),
        )
        .service(
            web::resource("/student.update")
                .route(web::post().to(update_student).wrap(admin_only())),
        )
        .service(
            web::resource("/student.delete")
                .route(web::post().to(delete_student).wrap(admin_only())),
        );
}
