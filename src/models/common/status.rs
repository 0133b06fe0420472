use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::string_enum;

// 记录状态，班级 / 教师 / 科目等共用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}

string_enum!(RecordStatus {
    Active => "active",
    Inactive => "inactive",
    Archived => "archived",
});

impl RecordStatus {
    /// 从数据库字符串转换，未知值按 inactive 处理
    pub fn from_db(value: &str) -> Self {
        value.parse().unwrap_or(RecordStatus::Inactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_status_roundtrip_strings() {
        for status in RecordStatus::all() {
            assert_eq!(status.as_str().parse::<RecordStatus>(), Ok(*status));
        }
        assert!("deleted".parse::<RecordStatus>().is_err());
    }

    #[test]
    fn test_default_is_active() {
        assert_eq!(RecordStatus::default(), RecordStatus::Active);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&RecordStatus::Archived).unwrap();
        assert_eq!(json, "\"archived\"");
        let parsed: RecordStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, RecordStatus::Inactive);
    }
}
