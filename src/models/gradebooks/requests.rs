use serde::Deserialize;
use ts_rs::TS;

use super::entities::AssessmentKind;
use crate::errors::{DashboardError, Result};
use crate::utils::validate::require_non_empty;

/// 更新科目成绩记录
///
/// 部分更新：缺省字段保持原值，`grade` / `remarks` 传空字符串表示清空
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct UpdateSubjectRecordRequest {
    pub gradebook_id: i64,
    pub subject_id: i64,
    pub score: Option<f64>,
    pub grade: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct CreateAssessmentSystemRequest {
    pub name: String,
    #[serde(default)]
    pub kind: AssessmentKind,
    pub min_score: f64,
    pub max_score: f64,
    pub passing_score: f64,
    #[serde(default)]
    pub is_default: bool,
}

impl CreateAssessmentSystemRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        if self.min_score >= self.max_score {
            return Err(DashboardError::validation(
                "min_score must be lower than max_score",
            ));
        }
        if self.passing_score < self.min_score || self.passing_score > self.max_score {
            return Err(DashboardError::validation(
                "passing_score must lie between min_score and max_score",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_system_bounds() {
        let mut req = CreateAssessmentSystemRequest {
            name: "GPA".to_string(),
            kind: AssessmentKind::Points,
            min_score: 0.0,
            max_score: 4.0,
            passing_score: 2.0,
            is_default: false,
        };
        assert!(req.validate().is_ok());
        req.passing_score = 5.0;
        assert!(req.validate().is_err());
        req.passing_score = 2.0;
        req.max_score = 0.0;
        assert!(req.validate().is_err());
    }
}
