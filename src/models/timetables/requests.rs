use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::utils::validate::validate_time_of_day;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateTimetableSlotRequest {
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: Option<i64>,
    pub room_id: Option<i64>,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
}

impl CreateTimetableSlotRequest {
    pub fn validate(&self) -> Result<()> {
        if !(0..=6).contains(&self.day_of_week) {
            return Err(DashboardError::validation(
                "day_of_week must be between 0 and 6",
            ));
        }
        validate_time_of_day(&self.start_time).map_err(DashboardError::validation)?;
        validate_time_of_day(&self.end_time).map_err(DashboardError::validation)?;
        if self.start_time >= self.end_time {
            return Err(DashboardError::validation(
                "start_time must be earlier than end_time",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(day: i32, start: &str, end: &str) -> CreateTimetableSlotRequest {
        CreateTimetableSlotRequest {
            class_id: 1,
            subject_id: 1,
            teacher_id: None,
            room_id: None,
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn test_timetable_validation() {
        assert!(request(0, "08:00", "08:45").validate().is_ok());
        assert!(request(7, "08:00", "08:45").validate().is_err());
        assert!(request(1, "8:00", "08:45").validate().is_err());
        assert!(request(1, "09:00", "09:00").validate().is_err());
        assert!(request(1, "10:00", "09:00").validate().is_err());
    }
}
