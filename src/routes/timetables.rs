use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{respond, respond_empty, staff_only};
use crate::middlewares::RequestContext;
use crate::models::common::{ClassIdRequest, IdRequest};
use crate::models::timetables::requests::CreateTimetableSlotRequest;

pub async fn create_slot(
    ctx: RequestContext,
    body: web::Json<CreateTimetableSlotRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "timetable.create",
        ctx.timetables().create(body.into_inner()).await,
        "Timetable slot created successfully",
    )
}

pub async fn list_slots(
    ctx: RequestContext,
    body: web::Json<ClassIdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "timetable.listByClass",
        ctx.timetables().list_by_class(body.class_id).await,
        "Timetable retrieved successfully",
    )
}

pub async fn delete_slot(
    ctx: RequestContext,
    body: web::Json<IdRequest>,
) -> ActixResult<HttpResponse> {
    respond_empty(
        "timetable.delete",
        ctx.timetables().delete(body.id).await,
        "Timetable slot deleted successfully",
    )
}

pub fn configure_timetable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/timetable.listByClass").route(web::post().to(list_slots)))
        .service(
            web::resource("/timetable.create").route(web::post().to(create_slot).wrap(staff_only())),
        )
        .service(
            web::resource("/timetable.delete").route(web::post().to(delete_slot).wrap(staff_only())),
        );
}
