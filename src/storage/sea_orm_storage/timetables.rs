use super::{SeaOrmStorage, db_delete_error, db_error, ensure_deleted};
use crate::entity::timetables::{ActiveModel, Column, Entity as Timetables};
use crate::errors::Result;
use crate::models::timetables::{
    entities::TimetableSlot, requests::CreateTimetableSlotRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_timetable_slot_impl(
        &self,
        req: CreateTimetableSlotRequest,
    ) -> Result<TimetableSlot> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            room_id: Set(req.room_id),
            day_of_week: Set(req.day_of_week),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create timetable slot"))?;

        Ok(result.into_slot())
    }

    pub async fn list_timetable_by_class_impl(&self, class_id: i64) -> Result<Vec<TimetableSlot>> {
        let slots = Timetables::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_error("list timetable"))?;

        Ok(slots.into_iter().map(|m| m.into_slot()).collect())
    }

    pub async fn delete_timetable_slot_impl(&self, id: i64) -> Result<()> {
        let result = Timetables::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete timetable slot"))?;

        ensure_deleted(result, "Timetable slot", id)
    }
}
