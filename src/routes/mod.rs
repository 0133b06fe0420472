//! HTTP 路由
//!
//! 远程过程统一以 `POST /api/v1/rpc/<entity>.<operation>` 暴露，输入为 JSON 对象，
//! 输出为统一的 `ApiResponse` 包装。页面路由位于 `/dashboard/{role}/...`。

pub mod activities;
pub mod analytics;
pub mod attendance;
pub mod auth;
pub mod campuses;
pub mod class_groups;
pub mod classes;
pub mod gradebooks;
pub mod health;
pub mod pages;
pub mod role_templates;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod timetables;

use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::{error, info};
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::ApiResponse;
use crate::models::users::entities::UserRole;

pub use health::configure_health_routes;
pub use pages::configure_page_routes;

pub const RPC_PREFIX: &str = "/api/v1/rpc";

/// 过程失败时记录日志：内部错误用 error，调用方错误用 info
pub(crate) fn procedure_failed(procedure: &str, err: &DashboardError) {
    if err.kind().is_internal() {
        error!(procedure, "Procedure failed: {}", err);
    } else {
        info!(procedure, "Procedure rejected: {}", err);
    }
}

pub(crate) fn respond<T: Serialize + TS>(
    procedure: &str,
    result: Result<T>,
    message: &str,
) -> ActixResult<HttpResponse> {
    match result {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data, message))),
        Err(e) => {
            procedure_failed(procedure, &e);
            Err(e.into())
        }
    }
}

pub(crate) fn respond_empty(
    procedure: &str,
    result: Result<()>,
    message: &str,
) -> ActixResult<HttpResponse> {
    match result {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(message))),
        Err(e) => {
            procedure_failed(procedure, &e);
            Err(e.into())
        }
    }
}

pub(crate) fn admin_only() -> RequireRole {
    RequireRole::any_of(UserRole::admin_roles())
}

pub(crate) fn staff_only() -> RequireRole {
    RequireRole::any_of(UserRole::staff_roles())
}

// 配置全部远程过程路由
pub fn configure_rpc_routes(cfg: &mut web::ServiceConfig) {
    // 登录不需要认证，必须先于受保护的 scope 注册
    cfg.service(
        web::resource(format!("{RPC_PREFIX}/auth.login")).route(web::post().to(auth::login)),
    )
    .service(
        web::scope(RPC_PREFIX)
            .wrap(RequireJWT)
            .configure(auth::configure_auth_routes)
            .configure(campuses::configure_campus_routes)
            .configure(class_groups::configure_class_group_routes)
            .configure(classes::configure_class_routes)
            .configure(teachers::configure_teacher_routes)
            .configure(students::configure_student_routes)
            .configure(subjects::configure_subject_routes)
            .configure(timetables::configure_timetable_routes)
            .configure(activities::configure_activity_routes)
            .configure(attendance::configure_attendance_routes)
            .configure(gradebooks::configure_gradebook_routes)
            .configure(analytics::configure_analytics_routes)
            .configure(role_templates::configure_role_template_routes),
    );
}

// 应用全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_health_routes(cfg);
    configure_rpc_routes(cfg);
    configure_page_routes(cfg);
}
