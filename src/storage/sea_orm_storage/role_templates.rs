//! 角色模板存储操作

use super::{SeaOrmStorage, db_delete_error, db_error, ensure_deleted};
use crate::entity::role_templates::{ActiveModel, Column, Entity as RoleTemplates};
use crate::errors::Result;
use crate::models::role_templates::{
    entities::RoleTemplate, requests::CreateRoleTemplateRequest,
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_role_template_impl(
        &self,
        req: CreateRoleTemplateRequest,
    ) -> Result<RoleTemplate> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            display_name: Set(req.display_name.trim().to_string()),
            description: Set(req.description),
            permissions: Set(serde_json::to_string(&req.permissions)?),
            settings: Set(serde_json::to_string(&req.settings)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create role template"))?;

        result.into_role_template()
    }

    pub async fn get_role_template_by_id_impl(&self, id: i64) -> Result<Option<RoleTemplate>> {
        let result = RoleTemplates::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query role template"))?;

        result.map(|m| m.into_role_template()).transpose()
    }

    pub async fn list_role_templates_impl(&self) -> Result<Vec<RoleTemplate>> {
        let templates = RoleTemplates::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("list role templates"))?;

        templates
            .into_iter()
            .map(|m| m.into_role_template())
            .collect()
    }

    pub async fn delete_role_template_impl(&self, id: i64) -> Result<()> {
        let result = RoleTemplates::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete role template"))?;

        ensure_deleted(result, "Role template", id)
    }
}
