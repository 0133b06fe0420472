use serde::Deserialize;
use ts_rs::TS;

use super::entities::TeacherType;
use crate::errors::{DashboardError, Result};
use crate::models::common::{RecordStatus, normalize_ids};
use crate::utils::validate::{require_non_empty, validate_email};

// 教师资料输入，ID 集合在入库前去重排序
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherProfileInput {
    #[serde(default)]
    pub teacher_type: TeacherType,
    pub specialization: Option<String>,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
    #[serde(default)]
    pub class_ids: Vec<i64>,
    #[serde(default)]
    pub campus_ids: Vec<i64>,
}

impl TeacherProfileInput {
    pub fn normalized(mut self) -> Self {
        self.subject_ids = normalize_ids(&self.subject_ids);
        self.class_ids = normalize_ids(&self.class_ids);
        self.campus_ids = normalize_ids(&self.campus_ids);
        self.specialization = self
            .specialization
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }
}

fn check_email(email: &str) -> Result<()> {
    validate_email(email).map_err(DashboardError::validation)
}

// 创建教师请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    pub user_id: Option<i64>,
    pub profile: Option<TeacherProfileInput>,
}

impl CreateTeacherRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("first_name", &self.first_name)?;
        require_non_empty("last_name", &self.last_name)?;
        check_email(&self.email)
    }
}

// 更新教师请求；profile 提供时整体覆盖（不存在则创建）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<RecordStatus>,
    pub profile: Option<TeacherProfileInput>,
}

impl UpdateTeacherRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(first_name) = &self.first_name {
            require_non_empty("first_name", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            require_non_empty("last_name", last_name)?;
        }
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        Ok(())
    }
}

// 教师列表查询：名或姓模糊匹配，campus_id 通过资料中的校区集合过滤
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListQuery {
    pub status: Option<RecordStatus>,
    pub search: Option<String>,
    pub campus_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_input_normalized() {
        let input = TeacherProfileInput {
            teacher_type: TeacherType::PartTime,
            specialization: Some("  ".to_string()),
            subject_ids: vec![5, 2, 5],
            class_ids: vec![],
            campus_ids: vec![3, 3],
        }
        .normalized();
        assert_eq!(input.subject_ids, vec![2, 5]);
        assert_eq!(input.campus_ids, vec![3]);
        assert_eq!(input.specialization, None);
    }

    #[test]
    fn test_create_teacher_rejects_bad_email() {
        let req = CreateTeacherRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            status: RecordStatus::Active,
            user_id: None,
            profile: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_teacher_type_parses_snake_case() {
        assert_eq!("part_time".parse::<TeacherType>(), Ok(TeacherType::PartTime));
        assert!("intern".parse::<TeacherType>().is_err());
    }
}
