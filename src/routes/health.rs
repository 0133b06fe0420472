use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::warn;
use ts_rs::TS;

use crate::models::{ApiResponse, AppStartTime};
use crate::storage::Storage;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/health.ts")]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: i64,
    pub database: String,
}

pub async fn health(
    storage: web::Data<Arc<dyn Storage>>,
    start: web::Data<AppStartTime>,
) -> ActixResult<HttpResponse> {
    let database = match storage.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!("Health check database ping failed: {}", e);
            "unavailable"
        }
    };
    let uptime_seconds = (chrono::Utc::now() - start.start_datetime).num_seconds();
    let status = HealthStatus {
        status: if database == "ok" { "ok" } else { "degraded" }.to_string(),
        uptime_seconds,
        database: database.to_string(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(status, "Service is running")))
}

pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
