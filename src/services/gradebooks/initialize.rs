use tracing::{debug, info};

use super::{GradebookService, assemble::assemble_gradebook, blueprint::build_blueprint};
use crate::errors::{DashboardError, ErrorKind, Result};
use crate::models::gradebooks::{
    entities::{AssessmentKind, AssessmentSystem, GradebookLookup},
    requests::CreateAssessmentSystemRequest,
};
use crate::services::FoundExt;
use crate::storage::Storage;

pub async fn get_or_initialize(
    service: &GradebookService,
    storage: &dyn Storage,
    class_id: i64,
) -> Result<GradebookLookup> {
    storage
        .get_class_by_id(class_id)
        .await?
        .or_not_found("Class", class_id)?;

    if let Some(record) = storage.find_gradebook_by_class(class_id).await? {
        return Ok(GradebookLookup {
            gradebook: assemble_gradebook(storage, record).await?,
            initialized: false,
        });
    }

    let _guard = service.locks.acquire(class_id).await;

    // 持锁后再次检查，等待期间可能已被其它请求创建
    if let Some(record) = storage.find_gradebook_by_class(class_id).await? {
        return Ok(GradebookLookup {
            gradebook: assemble_gradebook(storage, record).await?,
            initialized: false,
        });
    }

    let initialized = match initialize(service, storage, class_id).await {
        Ok(()) => true,
        Err(e) if e.kind() == ErrorKind::Conflict => {
            debug!(
                "Gradebook for class {} was created concurrently: {}",
                class_id, e
            );
            false
        }
        Err(e) => return Err(e),
    };

    let record = storage
        .find_gradebook_by_class(class_id)
        .await?
        .ok_or_else(|| {
            DashboardError::not_found(format!("Gradebook for class {class_id} not found"))
        })?;

    Ok(GradebookLookup {
        gradebook: assemble_gradebook(storage, record).await?,
        initialized,
    })
}

async fn initialize(service: &GradebookService, storage: &dyn Storage, class_id: i64) -> Result<()> {
    let system = ensure_assessment_system(service, storage).await?;
    let subject_ids = storage
        .list_class_subjects(class_id)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();

    let blueprint = build_blueprint(
        &service.config,
        class_id,
        system.id,
        subject_ids,
        chrono::Utc::now().date_naive(),
    );

    let record = storage.create_gradebook(blueprint).await?;
    info!("Gradebook {} initialized for class {}", record.id, class_id);
    Ok(())
}

/// 默认评估体系，不存在时按配置创建
async fn ensure_assessment_system(
    service: &GradebookService,
    storage: &dyn Storage,
) -> Result<AssessmentSystem> {
    if let Some(system) = storage.find_default_assessment_system().await? {
        return Ok(system);
    }

    let defaults = &service.config.default_assessment_system;
    if let Some(system) = storage.get_assessment_system_by_name(&defaults.name).await? {
        return Ok(system);
    }

    let request = CreateAssessmentSystemRequest {
        name: defaults.name.clone(),
        kind: defaults.kind.parse::<AssessmentKind>().map_err(|e| {
            DashboardError::internal_server_error(format!(
                "gradebook.default_assessment_system.kind: {e}"
            ))
        })?,
        min_score: defaults.min_score,
        max_score: defaults.max_score,
        passing_score: defaults.passing_score,
        is_default: true,
    };
    request.validate()?;

    match storage.create_assessment_system(request).await {
        Ok(system) => Ok(system),
        // 并发创建同名体系时读取已存在的一条
        Err(e) if e.kind() == ErrorKind::Conflict => storage
            .get_assessment_system_by_name(&defaults.name)
            .await?
            .ok_or(e),
        Err(e) => Err(e),
    }
}
