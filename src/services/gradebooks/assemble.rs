use std::collections::HashMap;

use crate::errors::{DashboardError, Result};
use crate::models::gradebooks::entities::{
    AssessmentPeriod, Gradebook, GradebookRecord, TermWithPeriods,
};
use crate::services::FoundExt;
use crate::storage::Storage;

/// 由扁平记录组装成绩册视图
pub async fn assemble_gradebook(storage: &dyn Storage, record: GradebookRecord) -> Result<Gradebook> {
    let (system, structure, subject_records) = tokio::try_join!(
        storage.get_assessment_system_by_id(record.assessment_system_id),
        storage.get_term_structure(record.id),
        storage.list_subject_records(record.id),
    )?;

    let assessment_system =
        system.or_not_found("Assessment system", record.assessment_system_id)?;
    let term_structure = structure.ok_or_else(|| {
        DashboardError::not_found(format!("Term structure for gradebook {} not found", record.id))
    })?;

    let terms = storage.list_terms(term_structure.id).await?;
    let term_ids: Vec<i64> = terms.iter().map(|t| t.id).collect();
    let periods = storage.list_assessment_periods(&term_ids).await?;

    let mut periods_by_term: HashMap<i64, Vec<AssessmentPeriod>> = HashMap::new();
    for period in periods {
        periods_by_term.entry(period.term_id).or_default().push(period);
    }

    let terms = terms
        .into_iter()
        .map(|term| {
            let mut periods = periods_by_term.remove(&term.id).unwrap_or_default();
            periods.sort_by_key(|p| p.sequence);
            TermWithPeriods { term, periods }
        })
        .collect();

    Ok(Gradebook {
        id: record.id,
        class_id: record.class_id,
        status: record.status,
        assessment_system,
        term_structure,
        terms,
        subject_records,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}
