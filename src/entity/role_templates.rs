//! 角色模板实体，permissions 与 settings 以 JSON 文本存储

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "role_templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub permissions: String,
    pub settings: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_role_template(
        self,
    ) -> crate::errors::Result<crate::models::role_templates::entities::RoleTemplate> {
        use crate::models::role_templates::entities::RoleTemplate;
        use chrono::{DateTime, Utc};

        Ok(RoleTemplate {
            id: self.id,
            name: self.name,
            display_name: self.display_name,
            description: self.description,
            permissions: serde_json::from_str(&self.permissions)?,
            settings: serde_json::from_str(&self.settings)?,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        })
    }
}
