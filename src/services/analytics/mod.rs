//! 聚合统计
//!
//! 每次调用都重新查询并计算，不缓存结果。

pub mod reductions;

use std::sync::Arc;

use super::FoundExt;
use crate::config::{AnalyticsConfig, AppConfig};
use crate::errors::Result;
use crate::models::analytics::{AttendanceTrend, HistoricalGrowth, PerformanceReport};
use crate::models::attendance::requests::AttendanceQuery;
use crate::storage::Storage;

pub struct AnalyticsService {
    storage: Arc<dyn Storage>,
    late_counts_as_present: bool,
}

impl AnalyticsService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_config(storage, &AppConfig::get().analytics)
    }

    pub fn with_config(storage: Arc<dyn Storage>, config: &AnalyticsConfig) -> Self {
        Self {
            storage,
            late_counts_as_present: config.late_counts_as_present,
        }
    }

    async fn ensure_class(&self, class_id: i64) -> Result<()> {
        self.storage
            .get_class_by_id(class_id)
            .await?
            .or_not_found("Class", class_id)
            .map(|_| ())
    }

    pub async fn attendance_trend(&self, query: AttendanceQuery) -> Result<AttendanceTrend> {
        query.validate()?;
        let class_id = query.class_id;
        self.ensure_class(class_id).await?;

        let records = self.storage.list_attendance(query).await?;
        Ok(reductions::attendance_trend(
            class_id,
            &records,
            self.late_counts_as_present,
        ))
    }

    pub async fn performance_by_subject(&self, class_id: i64) -> Result<PerformanceReport> {
        self.ensure_class(class_id).await?;

        let (submissions, subjects) = tokio::try_join!(
            self.storage.list_scored_submissions(class_id),
            self.storage.list_class_subjects(class_id),
        )?;
        Ok(reductions::performance_by_subject(
            class_id,
            &submissions,
            &subjects,
        ))
    }

    pub async fn historical_growth(&self, class_id: i64) -> Result<HistoricalGrowth> {
        self.ensure_class(class_id).await?;

        let (records, submissions) = tokio::try_join!(
            self.storage.list_attendance(AttendanceQuery::for_class(class_id)),
            self.storage.list_scored_submissions(class_id),
        )?;
        Ok(reductions::historical_growth(
            class_id,
            &records,
            &submissions,
            self.late_counts_as_present,
        ))
    }
}
