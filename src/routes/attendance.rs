use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{respond, staff_only};
use crate::middlewares::RequestContext;
use crate::models::attendance::requests::{AttendanceQuery, RecordAttendanceRequest};

pub async fn record_attendance(
    ctx: RequestContext,
    body: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "attendance.record",
        ctx.attendance().record(body.into_inner()).await,
        "Attendance recorded successfully",
    )
}

pub async fn list_attendance(
    ctx: RequestContext,
    body: web::Json<AttendanceQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "attendance.listByClass",
        ctx.attendance().list(body.into_inner()).await,
        "Attendance retrieved successfully",
    )
}

pub async fn attendance_trend(
    ctx: RequestContext,
    body: web::Json<AttendanceQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "attendance.trend",
        ctx.analytics().attendance_trend(body.into_inner()).await,
        "Attendance trend retrieved successfully",
    )
}

pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/attendance.listByClass").route(web::post().to(list_attendance)))
        .service(web::resource("/attendance.trend").route(web::post().to(attendance_trend)))
        .service(
            web::resource("/attendance.record")
                .route(web::post().to(record_attendance).wrap(staff_only())),
        );
}
