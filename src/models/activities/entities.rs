use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教学活动（作业、测验等），按科目计分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct Activity {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub max_score: f64,
    pub due_date: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct ActivitySubmission {
    pub id: i64,
    pub activity_id: i64,
    pub student_id: i64,
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// 已评分提交的扁平视图，供统计使用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSubmission {
    pub activity_id: i64,
    pub subject_id: i64,
    pub student_id: i64,
    pub score: f64,
    pub max_score: f64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl ScoredSubmission {
    /// 得分百分比
    pub fn percentage(&self) -> f64 {
        if self.max_score <= 0.0 {
            return 0.0;
        }
        self.score / self.max_score * 100.0
    }
}
