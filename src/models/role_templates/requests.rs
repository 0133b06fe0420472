use std::collections::HashSet;

use serde::Deserialize;
use ts_rs::TS;

use super::entities::RoleTemplateSettings;
use crate::errors::{DashboardError, Result};
use crate::utils::validate::{require_non_empty, validate_permission, validate_role_template_name};

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/role_template.ts")]
pub struct CreateRoleTemplateRequest {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub settings: RoleTemplateSettings,
}

impl CreateRoleTemplateRequest {
    pub fn validate(&self) -> Result<()> {
        validate_role_template_name(&self.name).map_err(DashboardError::validation)?;
        require_non_empty("display_name", &self.display_name)?;

        let mut seen = HashSet::new();
        for permission in &self.permissions {
            validate_permission(permission).map_err(|e| {
                DashboardError::validation(format!("Invalid permission '{permission}': {e}"))
            })?;
            if !seen.insert(permission.as_str()) {
                return Err(DashboardError::validation(format!(
                    "Duplicate permission '{permission}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role_templates::entities::PermissionScope;

    fn parse(json: &str) -> CreateRoleTemplateRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_template() {
        let req = parse(
            r#"{
                "name": "head_of_department",
                "display_name": "Head of Department",
                "description": null,
                "permissions": ["class:read", "gradebook:update"],
                "settings": {"scope": "campus", "customizable": true, "allow_overrides": false}
            }"#,
        );
        assert!(req.validate().is_ok());
        assert_eq!(req.settings.scope, PermissionScope::Campus);
    }

    #[test]
    fn test_invalid_name_and_permissions() {
        let mut req = parse(
            r#"{"name":"Teacher","display_name":"T","description":null,
                "permissions":["class:read"],"settings":{}}"#,
        );
        assert!(req.validate().is_err());

        req.name = "teacher".to_string();
        assert!(req.validate().is_ok());

        req.permissions = vec!["class:read".to_string(), "class:read".to_string()];
        assert!(req.validate().is_err());

        req.permissions = vec!["classread".to_string()];
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_scope_rejected() {
        let result = serde_json::from_str::<CreateRoleTemplateRequest>(
            r#"{"name":"x","display_name":"X","description":null,
                "permissions":[],"settings":{"scope":"planet"}}"#,
        );
        assert!(result.is_err());
    }
}
