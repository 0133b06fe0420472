//! 成绩册服务
//!
//! 读取班级成绩册时若不存在则按配置初始化。初始化在班级咨询锁内执行，
//! 并依赖 `gradebooks.class_id` 唯一索引兜底：插入冲突时改为重新读取。

pub mod assemble;
pub mod blueprint;
pub mod initialize;
pub mod locks;

use tracing::info;

use crate::config::{AppConfig, GradebookConfig};
use crate::errors::{DashboardError, Result};
use crate::models::gradebooks::{
    entities::{AssessmentSystem, GradebookLookup, SubjectRecord},
    requests::{CreateAssessmentSystemRequest, UpdateSubjectRecordRequest},
};
use crate::services::FoundExt;
use crate::storage::Storage;

use locks::ClassLocks;

pub struct GradebookService {
    locks: ClassLocks,
    config: GradebookConfig,
}

impl GradebookService {
    pub fn new(config: GradebookConfig) -> Self {
        Self {
            locks: ClassLocks::new(),
            config,
        }
    }

    pub fn from_app_config() -> Self {
        Self::new(AppConfig::get().gradebook.clone())
    }

    /// 当前仍被持有或等待的班级锁数量
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }

    /// 读取班级成绩册，不存在时初始化后重新读取
    pub async fn get_or_initialize(
        &self,
        storage: &dyn Storage,
        class_id: i64,
    ) -> Result<GradebookLookup> {
        initialize::get_or_initialize(self, storage, class_id).await
    }

    pub async fn update_subject_record(
        &self,
        storage: &dyn Storage,
        request: UpdateSubjectRecordRequest,
    ) -> Result<SubjectRecord> {
        let gradebook = storage
            .get_gradebook_by_id(request.gradebook_id)
            .await?
            .or_not_found("Gradebook", request.gradebook_id)?;

        if let Some(score) = request.score {
            let system = storage
                .get_assessment_system_by_id(gradebook.assessment_system_id)
                .await?
                .or_not_found("Assessment system", gradebook.assessment_system_id)?;
            if !system.accepts(score) {
                return Err(DashboardError::validation(format!(
                    "score must be between {} and {}",
                    system.min_score, system.max_score
                )));
            }
        }

        let subject_id = request.subject_id;
        storage.update_subject_record(request).await?.ok_or_else(|| {
            DashboardError::not_found(format!(
                "Subject {subject_id} has no record in gradebook {}",
                gradebook.id
            ))
        })
    }

    pub async fn list_assessment_systems(
        &self,
        storage: &dyn Storage,
    ) -> Result<Vec<AssessmentSystem>> {
        storage.list_assessment_systems().await
    }

    pub async fn create_assessment_system(
        &self,
        storage: &dyn Storage,
        request: CreateAssessmentSystemRequest,
    ) -> Result<AssessmentSystem> {
        request.validate()?;
        let system = storage.create_assessment_system(request).await?;
        info!("Assessment system {} created", system.name);
        Ok(system)
    }
}
