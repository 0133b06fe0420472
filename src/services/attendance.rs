use std::collections::HashSet;
use std::sync::Arc;

use super::FoundExt;
use crate::errors::{DashboardError, Result};
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceQuery, RecordAttendanceRequest},
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Arc<dyn Storage>,
}

impl AttendanceService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 登记一个班级某日的考勤，只接受已在班学生
    pub async fn record(&self, request: RecordAttendanceRequest) -> Result<Vec<AttendanceRecord>> {
        request.validate()?;
        self.storage
            .get_class_by_id(request.class_id)
            .await?
            .or_not_found("Class", request.class_id)?;

        let enrolled: HashSet<i64> = self
            .storage
            .list_class_students(request.class_id)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        if let Some(entry) = request
            .entries
            .iter()
            .find(|e| !enrolled.contains(&e.student_id))
        {
            return Err(DashboardError::validation(format!(
                "Student {} is not enrolled in class {}",
                entry.student_id, request.class_id
            )));
        }

        self.storage.upsert_attendance(request).await
    }

    pub async fn list(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>> {
        query.validate()?;
        self.storage
            .get_class_by_id(query.class_id)
            .await?
            .or_not_found("Class", query.class_id)?;
        self.storage.list_attendance(query).await
    }
}
