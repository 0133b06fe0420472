//! 教师资料实体
//!
//! 关联的科目 / 班级 / 校区 ID 集合以 JSON 数组文本存储。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub teacher_id: i64,
    pub teacher_type: String,
    pub specialization: Option<String>,
    pub subject_ids: String,
    pub class_ids: String,
    pub campus_ids: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 解析 JSON 数组形式的 ID 集合，格式异常时视为空集合
pub fn parse_id_set(raw: &str) -> Vec<i64> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn encode_id_set(ids: &[i64]) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

impl Model {
    pub fn into_profile(self) -> crate::models::teachers::entities::TeacherProfile {
        use crate::models::teachers::entities::TeacherProfile;
        use chrono::{DateTime, Utc};

        TeacherProfile {
            teacher_type: self.teacher_type.parse().unwrap_or_default(),
            specialization: self.specialization,
            subject_ids: parse_id_set(&self.subject_ids),
            class_ids: parse_id_set(&self.class_ids),
            campus_ids: parse_id_set(&self.campus_ids),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_set_encoding() {
        assert_eq!(encode_id_set(&[1, 2]), "[1,2]");
        assert_eq!(parse_id_set("[3,4]"), vec![3, 4]);
        assert!(parse_id_set("garbage").is_empty());
    }
}
