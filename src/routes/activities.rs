use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{respond, respond_empty, staff_only};
use crate::middlewares::RequestContext;
use crate::models::activities::requests::{CreateActivityRequest, RecordSubmissionRequest};
use crate::models::common::{ClassIdRequest, IdRequest};

pub async fn create_activity(
    ctx: RequestContext,
    body: web::Json<CreateActivityRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "activity.create",
        ctx.activities().create(body.into_inner()).await,
        "Activity created successfully",
    )
}

pub async fn list_activities(
    ctx: RequestContext,
    body: web::Json<ClassIdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "activity.listByClass",
        ctx.activities().list_by_class(body.class_id).await,
        "Activities retrieved successfully",
    )
}

pub async fn delete_activity(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "activity.delete",
        ctx.activities().delete(body.id).await,
        "Activity deleted successfully",
    )
}

// 同一学生重复登记时覆盖原分数
pub async fn record_submission(
    ctx: RequestContext,
    body: web::Json<RecordSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "activity.recordSubmission",
        ctx.activities().record_submission(body.into_inner()).await,
        "Submission recorded successfully",
    )
}

pub fn configure_activity_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/activity.listByClass").route(web::post().to(list_activities)))
        .service(
            web::resource("/activity.create")
                .route(web::post().to(create_activity).wrap(staff_only())),
        )
        .service(
            web::resource("/activity.delete")
                .route(web::post().to(delete_activity).wrap(staff_only())),
        )
        .service(
            web::resource("/activity.recordSubmission")
                .route(web::post().to(record_submission).wrap(staff_only())),
        );
}
