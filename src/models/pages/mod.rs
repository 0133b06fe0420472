//! 页面视图模型
//!
//! 页面渲染器并发获取所需数据，整理为视图模型后以 `PageState` 返回。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::DashboardError;
use crate::models::analytics::{AttendanceTrend, PerformanceReport};
use crate::models::classes::entities::{Class, ClassDetail};
use crate::models::common::{NamedRef, OptionItem, RecordStatus};
use crate::models::gradebooks::entities::Gradebook;
use crate::models::subjects::entities::SubjectSummary;
use crate::models::teachers::entities::Teacher;
use crate::models::users::entities::UserRole;

/// 页面三态：成功 / 未找到 / 出错
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub enum PageState<T> {
    Success { data: T },
    NotFound { message: String },
    Error { message: String },
}

impl<T> PageState<T> {
    pub fn not_found(message: impl Into<String>) -> Self {
        PageState::NotFound {
            message: message.into(),
        }
    }

    /// 由错误转换：NotFound 归为未找到，其余为出错；内部错误只展示通用提示
    pub fn from_error(err: &DashboardError) -> Self {
        if err.is_not_found() {
            PageState::NotFound {
                message: err.public_message().to_string(),
            }
        } else {
            PageState::Error {
                message: err.public_message().to_string(),
            }
        }
    }

    pub fn from_result(result: Result<T, DashboardError>) -> Self {
        match result {
            Ok(data) => PageState::Success { data },
            Err(err) => Self::from_error(&err),
        }
    }

    pub fn state(&self) -> &'static str {
        match self {
            PageState::Success { .. } => "success",
            PageState::NotFound { .. } => "not_found",
            PageState::Error { .. } => "error",
        }
    }
}

// 教师编辑表单默认值，缺失的资料字段以空字符串 / 空数组填充
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct TeacherFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub status: RecordStatus,
    pub teacher_type: String,
    pub specialization: String,
    pub subject_ids: Vec<i64>,
    pub class_ids: Vec<i64>,
    pub campus_ids: Vec<i64>,
}

impl From<&Teacher> for TeacherFormValues {
    fn from(teacher: &Teacher) -> Self {
        let profile = teacher.profile.as_ref();
        Self {
            first_name: teacher.first_name.clone(),
            last_name: teacher.last_name.clone(),
            email: teacher.email.clone(),
            phone: teacher.phone.clone().unwrap_or_default(),
            status: teacher.status,
            teacher_type: profile
                .map(|p| p.teacher_type.to_string())
                .unwrap_or_default(),
            specialization: profile
                .and_then(|p| p.specialization.clone())
                .unwrap_or_default(),
            subject_ids: profile.map(|p| p.subject_ids.clone()).unwrap_or_default(),
            class_ids: profile.map(|p| p.class_ids.clone()).unwrap_or_default(),
            campus_ids: profile.map(|p| p.campus_ids.clone()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct TeacherEditPage {
    pub role: UserRole,
    pub teacher_id: i64,
    pub form: TeacherFormValues,
    pub subject_options: Vec<OptionItem>,
    pub class_options: Vec<OptionItem>,
    pub campus_options: Vec<OptionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct ClassFormValues {
    pub name: String,
    pub capacity: i32,
    pub status: RecordStatus,
    pub class_group_id: i64,
    pub campus_id: i64,
    pub building_id: Option<i64>,
    pub room_id: Option<i64>,
    pub teacher_ids: Vec<i64>,
    pub subject_ids: Vec<i64>,
}

impl ClassFormValues {
    pub fn new(class: &Class, teacher_ids: Vec<i64>, subject_ids: Vec<i64>) -> Self {
        Self {
            name: class.name.clone(),
            capacity: class.capacity,
            status: class.status,
            class_group_id: class.class_group_id,
            campus_id: class.campus_id,
            building_id: class.building_id,
            room_id: class.room_id,
            teacher_ids,
            subject_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct ClassEditPage {
    pub role: UserRole,
    pub class_id: i64,
    pub form: ClassFormValues,
    pub class_group_options: Vec<OptionItem>,
    pub campus_options: Vec<OptionItem>,
    pub building_options: Vec<OptionItem>,
    pub room_options: Vec<OptionItem>,
    pub teacher_options: Vec<OptionItem>,
    pub subject_options: Vec<OptionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct ClassDetailPage {
    pub role: UserRole,
    pub class: ClassDetail,
    pub gradebook: Gradebook,
    pub attendance: AttendanceTrend,
    pub performance: PerformanceReport,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct GradebookPage {
    pub role: UserRole,
    pub class: NamedRef,
    pub subjects: Vec<SubjectSummary>,
    pub gradebook: Gradebook,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::teachers::entities::{TeacherProfile, TeacherType};

    fn teacher(profile: Option<TeacherProfile>) -> Teacher {
        let now = chrono::Utc::now();
        Teacher {
            id: 7,
            user_id: None,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@school.test".to_string(),
            phone: None,
            status: RecordStatus::Active,
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_form_values_without_profile_use_empty_defaults() {
        let form = TeacherFormValues::from(&teacher(None));
        assert_eq!(form.phone, "");
        assert_eq!(form.teacher_type, "");
        assert_eq!(form.specialization, "");
        assert!(form.subject_ids.is_empty());
        assert!(form.class_ids.is_empty());
        assert!(form.campus_ids.is_empty());
    }

    #[test]
    fn test_form_values_with_profile() {
        let profile = TeacherProfile {
            teacher_type: TeacherType::Contract,
            specialization: Some("Mathematics".to_string()),
            subject_ids: vec![1, 2],
            class_ids: vec![3],
            campus_ids: vec![],
            updated_at: chrono::Utc::now(),
        };
        let form = TeacherFormValues::from(&teacher(Some(profile)));
        assert_eq!(form.teacher_type, "contract");
        assert_eq!(form.specialization, "Mathematics");
        assert_eq!(form.subject_ids, vec![1, 2]);
    }

    #[test]
    fn test_page_state_from_error() {
        let state: PageState<()> = PageState::from_error(&DashboardError::not_found("gone"));
        assert_eq!(state.state(), "not_found");

        let state: PageState<()> =
            PageState::from_error(&DashboardError::internal_server_error("db down"));
        assert_eq!(
            state,
            PageState::Error {
                message: "An unexpected error occurred".to_string()
            }
        );
    }

    #[test]
    fn test_page_state_serializes_with_tag() {
        let state = PageState::Success { data: 5 };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "success");
        assert_eq!(json["data"], 5);
    }
}
