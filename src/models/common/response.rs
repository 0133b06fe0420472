use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ErrorKind;

pub const SUCCESS_CODE: &str = "OK";

/// 所有过程与页面共用的响应信封
///
/// 成功时 `code` 为 `"OK"`，失败时为 [`ErrorKind`] 的代码；`data` 为空时不输出该字段。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T: TS> ApiResponse<T> {
    fn envelope(code: &str, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::envelope(SUCCESS_CODE, message, Some(data))
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::envelope(SUCCESS_CODE, message, None)
    }

    pub fn error_empty(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::envelope(kind.code(), message, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::error_empty(
            ErrorKind::Conflict,
            "Class is full",
        ))
        .unwrap();
        assert_eq!(json["code"], "CONFLICT");
        assert_eq!(json["message"], "Class is full");
        assert!(json.get("data").is_none());

        let json = serde_json::to_value(ApiResponse::success(3_i64, "Counted")).unwrap();
        assert_eq!(json["code"], SUCCESS_CODE);
        assert_eq!(json["data"], 3);
    }
}
