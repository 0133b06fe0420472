use actix_web::{HttpResponse, Result as ActixResult, web};

use super::respond;
use crate::middlewares::RequestContext;
use crate::models::attendance::requests::AttendanceQuery;
use crate::models::common::ClassIdRequest;

pub async fn attendance_trend(
    ctx: RequestContext,
    body: web::Json<AttendanceQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        "analytics.attendanceTrend",
        ctx.analytics().attendance_trend(body.into_inner()).await,
        "Attendance trend retrieved successfully",
    )
}

pub async fn performance_by_subject(
    ctx: RequestContext,
    body: web::Json<ClassIdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "analytics.performanceBySubject",
        ctx.analytics().performance_by_subject(body.class_id).await,
        "Performance report retrieved successfully",
    )
}

pub async fn historical_growth(
    ctx: RequestContext,
    body: web::Json<ClassIdRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        "analytics.historicalGrowth",
        ctx.analytics().historical_growth(body.class_id).await,
        "Historical growth retrieved successfully",
    )
}

pub fn configure_analytics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/analytics.attendanceTrend").route(web::post().to(attendance_trend)),
    )
    .service(
        web::resource("/analytics.performanceBySubject")
            .route(web::post().to(performance_by_subject)),
    )
    .service(
        web::resource("/analytics.historicalGrowth").route(web::post().to(historical_growth)),
    );
}
