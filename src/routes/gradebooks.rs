use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{admin_only, respond, staff_only};
use crate::middlewares::RequestContext;
use crate::models::common::ClassIdRequest;
use crate::models::gradebooks::requests::{
    CreateAssessmentSystemRequest, UpdateSubjectRecordRequest,
};

// 读取班级成绩册，不存在时惰性初始化
pub async fn get_by_class(
    ctx: RequestContext,
    body: web::Json<ClassIdRequest>,
) -> ActixResult<HttpResponse> {
    let result = ctx
        .gradebooks
        .get_or_initialize(ctx.storage.as_ref(), body.class_id)
        .await;
    respond("gradebook.getByClass", result, "Gradebook retrieved successfully")
}

pub async fn update_subject_record(
    ctx: RequestContext,
    body: web::Json<UpdateSubjectRecordRequest>,
) -> ActixResult<HttpResponse> {
    let result = ctx
        .gradebooks
        .update_subject_record(ctx.storage.as_ref(), body.into_inner())
        .await;
    respond(
        "gradebook.updateSubjectRecord",
        result,
        "Subject record updated successfully",
    )
}

pub async fn list_assessment_systems(ctx: RequestContext) -> ActixResult<HttpResponse> {
    let result = ctx
        .gradebooks
        .list_assessment_systems(ctx.storage.as_ref())
        .await;
    respond(
        "assessmentSystem.list",
        result,
        "Assessment systems retrieved successfully",
    )
}

pub async fn create_assessment_system(
    ctx: RequestContext,
    body: web::Json<CreateAssessmentSystemRequest>,
) -> ActixResult<HttpResponse> {
    let result = ctx
        .gradebooks
        .create_assessment_system(ctx.storage.as_ref(), body.into_inner())
        .await;
    respond(
        "assessmentSystem.create",
        result,
        "Assessment system created successfully",
    )
}

pub fn configure_gradebook_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/gradebook.getByClass").route(web::post().to(get_by_class)))
        .service(
            web::resource("/gradebook.updateSubjectRecord")
                .route(web::post().to(update_subject_record).wrap(staff_only())),
        )
        .service(
            web::resource("/assessmentSystem.list").route(web::post().to(list_assessment_systems)),
        )
        .service(
            web::resource("/assessmentSystem.create")
                .route(web::post().to(create_assessment_system).wrap(admin_only())),
        );
}
