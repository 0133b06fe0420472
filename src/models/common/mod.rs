pub mod response;
pub mod status;

pub use response::ApiResponse;
pub use status::RecordStatus;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 为以字符串形式入库的枚举生成 `as_str` / `Display` / `FromStr`
///
/// 数据库中统一存储 snake_case 字符串，与 serde 的 `rename_all = "snake_case"` 保持一致。
#[macro_export]
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $text:literal),* $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }

            pub fn all() -> &'static [$name] {
                &[$($name::$variant,)*]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)*
                    _ => Err(format!(
                        "Invalid {}: '{}'. Expected one of: {}",
                        stringify!($name),
                        s,
                        [$($text),*].join(", ")
                    )),
                }
            }
        }
    };
}

// 仅包含 ID 的请求体，用于 get / delete 类过程
#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct IdRequest {
    pub id: i64,
}

// 以班级为作用域的请求体
#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct ClassIdRequest {
    pub class_id: i64,
}

// 关联实体的扁平引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

// 表单下拉选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct OptionItem {
    pub value: i64,
    pub label: String,
}

/// 对 ID 集合去重并排序
pub fn normalize_ids(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ids() {
        assert_eq!(normalize_ids(&[3, 1, 3, 2]), vec![1, 2, 3]);
        assert!(normalize_ids(&[]).is_empty());
    }
}
