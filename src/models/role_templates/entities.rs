use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::string_enum;

// 权限作用范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/role_template.ts")]
pub enum PermissionScope {
    #[default]
    Global,
    Campus,
    Class,
}

string_enum!(PermissionScope {
    Global => "global",
    Campus => "campus",
    Class => "class",
});

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/role_template.ts")]
pub struct RoleTemplateSettings {
    #[serde(default)]
    pub scope: PermissionScope,
    /// 是否允许基于模板派生自定义角色
    #[serde(default)]
    pub customizable: bool,
    /// 派生角色是否可以覆盖模板中的权限
    #[serde(default)]
    pub allow_overrides: bool,
}

// 角色模板，结构与 schemas/role-template.schema.json 一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/role_template.ts")]
pub struct RoleTemplate {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub settings: RoleTemplateSettings,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
