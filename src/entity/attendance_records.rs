//! 考勤记录实体，日期以 YYYY-MM-DD 文本存储

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub date: String,
    pub status: String,
    pub remarks: Option<String>,
    pub recorded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 日期或状态无法解析说明库中数据已损坏，按内部错误上报
    pub fn into_record(
        self,
    ) -> crate::errors::Result<crate::models::attendance::entities::AttendanceRecord> {
        use crate::errors::DashboardError;
        use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};
        use crate::utils::dates::parse_date;
        use chrono::{DateTime, Utc};

        let date = parse_date(&self.date).ok_or_else(|| {
            DashboardError::internal_server_error(format!(
                "Attendance record {} has malformed date '{}'",
                self.id, self.date
            ))
        })?;
        let status = self.status.parse::<AttendanceStatus>().map_err(|e| {
            DashboardError::internal_server_error(format!(
                "Attendance record {} has malformed status: {e}",
                self.id
            ))
        })?;

        Ok(AttendanceRecord {
            id: self.id,
            class_id: self.class_id,
            student_id: self.student_id,
            date,
            status,
            remarks: self.remarks,
            recorded_at: DateTime::<Utc>::from_timestamp(self.recorded_at, 0).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn row(date: &str, status: &str) -> Model {
        Model {
            id: 5,
            class_id: 1,
            student_id: 2,
            date: date.to_string(),
            status: status.to_string(),
            remarks: None,
            recorded_at: 0,
        }
    }

    #[test]
    fn test_malformed_rows_are_internal_errors() {
        assert!(row("2025-03-03", "late").into_record().is_ok());

        let err = row("03/03/2025", "present").into_record().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert!(err.message().contains("malformed date"));

        let err = row("2025-03-03", "sleeping").into_record().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert!(err.message().contains("malformed status"));
    }
}
