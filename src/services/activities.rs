//! 教学活动与成绩登记

use std::sync::Arc;

use super::FoundExt;
use crate::errors::Result;
use crate::models::activities::{
    entities::{Activity, ActivitySubmission},
    requests::{CreateActivityRequest, RecordSubmissionRequest},
};
use crate::storage::Storage;

pub struct ActivityService {
    storage: Arc<dyn Storage>,
}

impl ActivityService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateActivityRequest) -> Result<Activity> {
        request.validate()?;
        self.storage
            .get_class_by_id(request.class_id)
            .await?
            .or_invalid_reference("Class", request.class_id)?;
        self.storage
            .get_subject_by_id(request.subject_id)
            .await?
            .or_invalid_reference("Subject", request.subject_id)?;

        self.storage.create_activity(request).await
    }

    pub async fn list_by_class(&self, class_id: i64) -> Result<Vec<Activity>> {
        self.storage
            .get_class_by_id(class_id)
            .await?
            .or_not_found("Class", class_id)?;
        self.storage.list_activities_by_class(class_id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_activity(id).await
    }

    /// 分数必须落在 0 到活动满分之间
    pub async fn record_submission(
        &self,
        request: RecordSubmissionRequest,
    ) -> Result<ActivitySubmission> {
        let activity = self
            .storage
            .get_activity_by_id(request.activity_id)
            .await?
            .or_not_found("Activity", request.activity_id)?;
        request.validate_against(activity.max_score)?;

        self.storage
            .get_student_by_id(request.student_id)
            .await?
            .or_invalid_reference("Student", request.student_id)?;

        self.storage.upsert_submission(request).await
    }
}
