use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课表时段，时间为 HH:MM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableSlot {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: Option<i64>,
    pub room_id: Option<i64>,
    /// 0 = 周一 ... 6 = 周日
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl TimetableSlot {
    /// 同一天内两个时段是否重叠（首尾相接不算重叠）
    pub fn overlaps(&self, day_of_week: i32, start_time: &str, end_time: &str) -> bool {
        self.day_of_week == day_of_week
            && self.start_time.as_str() < end_time
            && start_time < self.end_time.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: &str, end: &str) -> TimetableSlot {
        TimetableSlot {
            id: 1,
            class_id: 1,
            subject_id: 1,
            teacher_id: None,
            room_id: None,
            day_of_week: 2,
            start_time: start.to_string(),
            end_time: end.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_overlap_detection() {
        let existing = slot("09:00", "10:00");
        assert!(existing.overlaps(2, "09:30", "10:30"));
        assert!(existing.overlaps(2, "08:00", "11:00"));
        assert!(!existing.overlaps(2, "10:00", "11:00"));
        assert!(!existing.overlaps(2, "08:00", "09:00"));
        assert!(!existing.overlaps(3, "09:30", "10:30"));
    }
}
