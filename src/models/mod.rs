pub mod activities;
pub mod analytics;
pub mod attendance;
pub mod auth;
pub mod campuses;
pub mod class_groups;
pub mod classes;
pub mod common;
pub mod gradebooks;
pub mod pages;
pub mod role_templates;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod timetables;
pub mod users;

pub use common::{ApiResponse, RecordStatus};

// 应用启动时间，用于健康检查的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
