use std::sync::Arc;

use super::FoundExt;
use crate::errors::{DashboardError, Result};
use crate::models::timetables::{entities::TimetableSlot, requests::CreateTimetableSlotRequest};
use crate::storage::Storage;

pub struct TimetableService {
    storage: Arc<dyn Storage>,
}

impl TimetableService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 同一班级同一天的时段不得重叠
    pub async fn create(&self, request: CreateTimetableSlotRequest) -> Result<TimetableSlot> {
        request.validate()?;
        self.check_references(&request).await?;

        let existing = self.storage.list_timetable_by_class(request.class_id).await?;
        if let Some(slot) = existing
            .iter()
            .find(|s| s.overlaps(request.day_of_week, &request.start_time, &request.end_time))
        {
            return Err(DashboardError::conflict(format!(
                "Timetable slot overlaps with slot {} ({}-{})",
                slot.id, slot.start_time, slot.end_time
            )));
        }

        self.storage.create_timetable_slot(request).await
    }

    pub async fn list_by_class(&self, class_id: i64) -> Result<Vec<TimetableSlot>> {
        self.storage
            .get_class_by_id(class_id)
            .await?
            .or_not_found("Class", class_id)?;
        self.storage.list_timetable_by_class(class_id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_timetable_slot(id).await
    }

    async fn check_references(&self, request: &CreateTimetableSlotRequest) -> Result<()> {
        self.storage
            .get_class_by_id(request.class_id)
            .await?
            .or_invalid_reference("Class", request.class_id)?;
        self.storage
            .get_subject_by_id(request.subject_id)
            .await?
            .or_invalid_reference("Subject", request.subject_id)?;
        if let Some(teacher_id) = request.teacher_id {
            self.storage
                .get_teacher_by_id(teacher_id)
                .await?
                .or_invalid_reference("Teacher", teacher_id)?;
        }
        if let Some(room_id) = request.room_id {
            self.storage
                .get_room_by_id(room_id)
                .await?
                .or_invalid_reference("Room", room_id)?;
        }
        Ok(())
    }
}
