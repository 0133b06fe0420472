//! 教学活动与提交存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, db_delete_error, db_error, ensure_deleted};
use crate::entity::activities::{ActiveModel, Column, Entity as Activities};
use crate::entity::activity_submissions::{
    ActiveModel as SubmissionActiveModel, Column as SubmissionColumn,
    Entity as ActivitySubmissions,
};
use crate::errors::Result;
use crate::models::activities::{
    entities::{Activity, ActivitySubmission, ScoredSubmission},
    requests::{CreateActivityRequest, RecordSubmissionRequest},
};
use crate::utils::dates::format_date;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_activity_impl(&self, req: CreateActivityRequest) -> Result<Activity> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            title: Set(req.title.trim().to_string()),
            max_score: Set(req.max_score),
            due_date: Set(req.due_date.map(format_date)),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create activity"))?;

        Ok(result.into_activity())
    }

    pub async fn get_activity_by_id_impl(&self, id: i64) -> Result<Option<Activity>> {
        let result = Activities::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query activity"))?;

        Ok(result.map(|m| m.into_activity()))
    }

    pub async fn list_activities_by_class_impl(&self, class_id: i64) -> Result<Vec<Activity>> {
        let activities = Activities::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("list activities"))?;

        Ok(activities.into_iter().map(|m| m.into_activity()).collect())
    }

    pub async fn delete_activity_impl(&self, id: i64) -> Result<()> {
        let result = Activities::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete activity"))?;

        ensure_deleted(result, "Activity", id)
    }

    /// 登记提交成绩，同一活动同一学生只保留一条
    pub async fn upsert_submission_impl(
        &self,
        req: RecordSubmissionRequest,
    ) -> Result<ActivitySubmission> {
        let now = chrono::Utc::now().timestamp();

        let existing = ActivitySubmissions::find()
            .filter(SubmissionColumn::ActivityId.eq(req.activity_id))
            .filter(SubmissionColumn::StudentId.eq(req.student_id))
            .one(&self.db)
            .await
            .map_err(db_error("query submission"))?;

        let saved = match existing {
            Some(submission) => {
                SubmissionActiveModel {
                    id: Set(submission.id),
                    score: Set(Some(req.score)),
                    feedback: Set(req.feedback),
                    submitted_at: Set(now),
                    ..Default::default()
                }
                .update(&self.db)
                .await
            }
            None => {
                SubmissionActiveModel {
                    activity_id: Set(req.activity_id),
                    student_id: Set(req.student_id),
                    score: Set(Some(req.score)),
                    feedback: Set(req.feedback),
                    submitted_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
            }
        }
        .map_err(db_error("record submission"))?;

        Ok(saved.into_submission())
    }

    /// 班级内所有已评分的提交，附带活动的科目与满分
    pub async fn list_scored_submissions_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<ScoredSubmission>> {
        let activities: HashMap<i64, (i64, f64)> = Activities::find()
            .filter(Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(db_error("list activities"))?
            .into_iter()
            .map(|a| (a.id, (a.subject_id, a.max_score)))
            .collect();

        if activities.is_empty() {
            return Ok(Vec::new());
        }

        let submissions = ActivitySubmissions::find()
            .filter(SubmissionColumn::ActivityId.is_in(activities.keys().copied()))
            .filter(SubmissionColumn::Score.is_not_null())
            .order_by_asc(SubmissionColumn::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(db_error("list submissions"))?;

        Ok(submissions
            .into_iter()
            .filter_map(|s| {
                let (subject_id, max_score) = *activities.get(&s.activity_id)?;
                Some(ScoredSubmission {
                    activity_id: s.activity_id,
                    subject_id,
                    student_id: s.student_id,
                    score: s.score?,
                    max_score,
                    submitted_at: chrono::DateTime::<chrono::Utc>::from_timestamp(
                        s.submitted_at,
                        0,
                    )
                    .unwrap_or_default(),
                })
            })
            .collect())
    }
}
