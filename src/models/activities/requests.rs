use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::utils::validate::require_non_empty;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct CreateActivityRequest {
    pub class_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub max_score: f64,
    pub due_date: Option<chrono::NaiveDate>,
}

impl CreateActivityRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("title", &self.title)?;
        if !self.max_score.is_finite() || self.max_score <= 0.0 {
            return Err(DashboardError::validation(
                "max_score must be greater than 0",
            ));
        }
        Ok(())
    }
}

// 登记提交成绩，同一学生重复登记时覆盖
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct RecordSubmissionRequest {
    pub activity_id: i64,
    pub student_id: i64,
    pub score: f64,
    pub feedback: Option<String>,
}

impl RecordSubmissionRequest {
    /// 分数范围校验：0 <= score <= max_score
    pub fn validate_against(&self, max_score: f64) -> Result<()> {
        if !self.score.is_finite() || self.score < 0.0 || self.score > max_score {
            return Err(DashboardError::validation(format!(
                "score must be between 0 and {max_score}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_score_range() {
        let mut req = RecordSubmissionRequest {
            activity_id: 1,
            student_id: 1,
            score: 20.0,
            feedback: None,
        };
        assert!(req.validate_against(20.0).is_ok());
        req.score = 20.5;
        assert!(req.validate_against(20.0).is_err());
        req.score = -1.0;
        assert!(req.validate_against(20.0).is_err());
    }
}
