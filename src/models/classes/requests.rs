use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::models::common::RecordStatus;
use crate::utils::validate::require_non_empty;

fn validate_capacity(capacity: i32) -> Result<()> {
    if capacity < 1 {
        return Err(DashboardError::validation(
            "Class capacity must be at least 1",
        ));
    }
    Ok(())
}

// 创建班级请求
//
// 同时提供 building_id 与 room_id 时，教室必须属于该教学楼（服务层校验）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub capacity: i32,
    #[serde(default)]
    pub status: RecordStatus,
    pub class_group_id: i64,
    pub campus_id: i64,
    pub building_id: Option<i64>,
    pub room_id: Option<i64>,
    #[serde(default)]
    pub teacher_ids: Vec<i64>,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
}

impl CreateClassRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        validate_capacity(self.capacity)
    }
}

// 更新班级请求（部分字段）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub id: i64,
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<RecordStatus>,
    pub class_group_id: Option<i64>,
    pub campus_id: Option<i64>,
    pub building_id: Option<i64>,
    pub room_id: Option<i64>,
}

impl UpdateClassRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(capacity) = self.capacity {
            validate_capacity(capacity)?;
        }
        Ok(())
    }
}

// 班级列表查询，status 缺省为 active
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListQuery {
    pub status: Option<RecordStatus>,
    pub search: Option<String>,
    pub campus_id: Option<i64>,
    pub class_group_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassTeacherRequest {
    pub class_id: i64,
    pub teacher_id: i64,
}

#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassStudentRequest {
    pub class_id: i64,
    pub student_id: i64,
}

#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSubjectRequest {
    pub class_id: i64,
    pub subject_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateClassRequest {
        CreateClassRequest {
            name: "Grade 7A".to_string(),
            capacity: 30,
            status: RecordStatus::Active,
            class_group_id: 1,
            campus_id: 1,
            building_id: None,
            room_id: None,
            teacher_ids: vec![],
            subject_ids: vec![],
        }
    }

    #[test]
    fn test_create_class_validation() {
        assert!(create_request().validate().is_ok());

        let mut blank = create_request();
        blank.name = "   ".to_string();
        assert!(blank.validate().is_err());

        let mut empty = create_request();
        empty.capacity = 0;
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_create_class_status_defaults_to_active() {
        let req: CreateClassRequest = serde_json::from_str(
            r#"{"name":"7A","capacity":20,"class_group_id":1,"campus_id":2}"#,
        )
        .unwrap();
        assert_eq!(req.status, RecordStatus::Active);
        assert!(req.teacher_ids.is_empty());
    }
}
