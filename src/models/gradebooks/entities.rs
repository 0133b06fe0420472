use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::RecordStatus;
use crate::string_enum;

// 评估体系类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub enum AssessmentKind {
    #[default]
    Percentage,
    Points,
    Letter,
}

string_enum!(AssessmentKind {
    Percentage => "percentage",
    Points => "points",
    Letter => "letter",
});

// 评估体系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct AssessmentSystem {
    pub id: i64,
    pub name: String,
    pub kind: AssessmentKind,
    pub min_score: f64,
    pub max_score: f64,
    pub passing_score: f64,
    pub is_default: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AssessmentSystem {
    pub fn accepts(&self, score: f64) -> bool {
        score.is_finite() && score >= self.min_score && score <= self.max_score
    }
}

// 成绩册主记录（扁平）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct GradebookRecord {
    pub id: i64,
    pub class_id: i64,
    pub assessment_system_id: i64,
    pub status: RecordStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct TermStructure {
    pub id: i64,
    pub gradebook_id: i64,
    pub academic_year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct Term {
    pub id: i64,
    pub term_structure_id: i64,
    pub name: String,
    pub sequence: i32,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct AssessmentPeriod {
    pub id: i64,
    pub term_id: i64,
    pub name: String,
    pub sequence: i32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct SubjectRecord {
    pub id: i64,
    pub gradebook_id: i64,
    pub subject_id: i64,
    pub score: Option<f64>,
    pub grade: Option<String>,
    pub remarks: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct TermWithPeriods {
    #[serde(flatten)]
    #[ts(flatten)]
    pub term: Term,
    pub periods: Vec<AssessmentPeriod>,
}

/// 组装后的成绩册视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct Gradebook {
    pub id: i64,
    pub class_id: i64,
    pub status: RecordStatus,
    pub assessment_system: AssessmentSystem,
    pub term_structure: TermStructure,
    pub terms: Vec<TermWithPeriods>,
    pub subject_records: Vec<SubjectRecord>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Gradebook {
    /// 学期与评估阶段均已生成
    pub fn is_fully_populated(&self) -> bool {
        !self.terms.is_empty() && self.terms.iter().all(|t| !t.periods.is_empty())
    }
}

/// 读取成绩册的结果，initialized 表示本次调用创建了成绩册
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct GradebookLookup {
    pub gradebook: Gradebook,
    pub initialized: bool,
}

/// 成绩册初始化蓝图，由服务层根据配置生成后交给存储层在单个事务内落库
#[derive(Debug, Clone, PartialEq)]
pub struct GradebookBlueprint {
    pub class_id: i64,
    pub assessment_system_id: i64,
    pub academic_year: String,
    pub terms: Vec<TermBlueprint>,
    pub subject_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TermBlueprint {
    pub name: String,
    pub sequence: i32,
    pub periods: Vec<PeriodBlueprint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodBlueprint {
    pub name: String,
    pub sequence: i32,
    pub weight: f64,
}
