//! 考勤存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::Result;
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceQuery, RecordAttendanceRequest},
};
use crate::utils::dates::format_date;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 登记考勤，同一学生同一天的记录被覆盖
    pub async fn upsert_attendance_impl(
        &self,
        req: RecordAttendanceRequest,
    ) -> Result<Vec<AttendanceRecord>> {
        let now = chrono::Utc::now().timestamp();
        let date = format_date(req.date);
        let txn = self.db.begin().await.map_err(db_error("begin transaction"))?;

        let mut saved = Vec::with_capacity(req.entries.len());
        for entry in req.entries {
            let existing = AttendanceRecords::find()
                .filter(Column::ClassId.eq(req.class_id))
                .filter(Column::StudentId.eq(entry.student_id))
                .filter(Column::Date.eq(date.as_str()))
                .one(&txn)
                .await
                .map_err(db_error("query attendance"))?;

            let model = match existing {
                Some(record) => {
                    ActiveModel {
                        id: Set(record.id),
                        status: Set(entry.status.to_string()),
                        remarks: Set(entry.remarks),
                        recorded_at: Set(now),
                        ..Default::default()
                    }
                    .update(&txn)
                    .await
                }
                None => {
                    ActiveModel {
                        class_id: Set(req.class_id),
                        student_id: Set(entry.student_id),
                        date: Set(date.clone()),
                        status: Set(entry.status.to_string()),
                        remarks: Set(entry.remarks),
                        recorded_at: Set(now),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await
                }
            }
            .map_err(db_error("record attendance"))?;

            saved.push(model);
        }

        txn.commit().await.map_err(db_error("commit transaction"))?;

        saved.into_iter().map(|m| m.into_record()).collect()
    }

    /// 按日期、学生排序列出考勤
    pub async fn list_attendance_impl(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>> {
        let mut select = AttendanceRecords::find().filter(Column::ClassId.eq(query.class_id));

        // YYYY-MM-DD 文本的字典序与日期顺序一致
        if let Some(from) = query.from {
            select = select.filter(Column::Date.gte(format_date(from)));
        }
        if let Some(to) = query.to {
            select = select.filter(Column::Date.lte(format_date(to)));
        }

        let records = select
            .order_by_asc(Column::Date)
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(db_error("list attendance"))?;

        records.into_iter().map(|m| m.into_record()).collect()
    }
}
