use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{admin_only, respond, respond_empty};
use crate::middlewares::RequestContext;
use crate::models::classes::requests::{
    ClassListQuery, ClassStudentRequest, ClassSubjectRequest, ClassTeacherRequest,
    CreateClassRequest, UpdateClassRequest,
};
use crate::models::common::{ClassIdRequest, IdRequest};

pub async fn create_class(
    ctx: RequestContext,
    body: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "class.create",
        ctx.classes().create(body.into_inner()).await,
        "Class created successfully",
    )
}

pub async fn list_classes(
    ctx: RequestContext,
    body: web::Json<ClassListQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "class.list",
        ctx.classes().list(body.into_inner()).await,
        "Classes retrieved successfully",
    )
}

// 返回带扁平关联摘要的班级详情
pub async fn get_class(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "class.get",
        ctx.classes().detail(body.id).await,
        "Class retrieved successfully",
    )
}

pub async fn update_class(
    ctx: RequestContext,
    body: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "class.update",
        ctx.classes().update(body.into_inner()).await,
        "Class updated successfully",
    )
}

pub async fn delete_class(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "class.delete",
        ctx.classes().delete(body.id).await,
        "Class deleted successfully",
    )
}

pub async fn assign_teacher(
    ctx: RequestContext,
    body: web::Json<ClassTeacherRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "class.assignTeacher",
        ctx.classes().assign_teacher(body.into_inner()).await,
        "Teacher assigned successfully",
    )
}

pub async fn remove_teacher(
    ctx: RequestContext,
    body: web::Json<ClassTeacherRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "class.removeTeacher",
        ctx.classes().remove_teacher(body.into_inner()).await,
        "Teacher removed successfully",
    )
}

pub async fn enroll_student(
    ctx: RequestContext,
    body: web::Json<ClassStudentRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "class.enrollStudent",
        ctx.classes().enroll_student(body.into_inner()).await,
        "Student enrolled successfully",
    )
}

pub async fn unenroll_student(
    ctx: RequestContext,
    body: web::Json<ClassStudentRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "class.unenrollStudent",
        ctx.classes().unenroll_student(body.into_inner()).await,
        "Student unenrolled successfully",
    )
}

pub async fn list_class_students(
    ctx: RequestContext,
    body: web::Json<ClassIdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "class.listStudents",
        ctx.classes().list_students(body.class_id).await,
        "Students retrieved successfully",
    )
}

pub async fn add_subject(
    ctx: RequestContext,
    body: web::Json<ClassSubjectRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "class.addSubject",
        ctx.classes().add_subject(body.into_inner()).await,
        "Subject added successfully",
    )
}

pub async fn remove_subject(
    ctx: RequestContext,
    body: web::Json<ClassSubjectRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "class.removeSubject",
        ctx.classes().remove_subject(body.into_inner()).await,
        "Subject removed successfully",
    )
}

pub fn configure_class_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/class.list").route(web::post().to(list_classes)))
        .service(web::resource("/class.get").route(web::post().to(get_class)))
        .service(web::resource("/class.listStudents").route(web::post().to(list_class_students)))
        .service(
            web::resource("/class.create").route(web::post().to(create_class).wrap(admin_only())),
        )
        .service(
            web::resource("/class.update").route(web::post().to(update_class).wrap(admin_only())),
        )
        .service(
            web::resource("/class.delete").route(web::post().to(delete_class).wrap(admin_only())),
        )
        // 成员关系
        .service(
            web::resource("/class.assignTeacher")
                .route(web::post().to(assign_teacher).wrap(admin_only())),
        )
        .service(
            web::resource("/class.removeTeacher")
                .route(web::post().to(remove_teacher).wrap(admin_only())),
        )
        .service(
            web::resource("/class.enrollStudent")
                .route(web::post().to(enroll_student).wrap(admin_only())),
        )
        .service(
            web::resource("/class.unenrollStudent")
                .route(web::post().to(unenroll_student).wrap(admin_only())),
        )
        .service(
            web::resource("/class.addSubject")
                .route(web::post().to(add_subject).wrap(admin_only())),
        )
        .service(
            web::resource("/class.removeSubject")
                .route(web::post().to(remove_subject).wrap(admin_only())),
        );
}
