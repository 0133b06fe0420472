use std::sync::Arc;

use tracing::info;

use super::FoundExt;
use crate::errors::Result;
use crate::models::role_templates::{
    entities::RoleTemplate, requests::CreateRoleTemplateRequest,
};
use crate::storage::Storage;

pub struct RoleTemplateService {
    storage: Arc<dyn Storage>,
}

impl RoleTemplateService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateRoleTemplateRequest) -> Result<RoleTemplate> {
        request.validate()?;
        let template = self.storage.create_role_template(request).await?;
        info!("Role template {} created", template.name);
        Ok(template)
    }

    pub async fn get(&self, id: i64) -> Result<RoleTemplate> {
        self.storage
            .get_role_template_by_id(id)
            .await?
            .or_not_found("Role template", id)
    }

    pub async fn list(&self) -> Result<Vec<RoleTemplate>> {
        self.storage.list_role_templates().await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_role_template(id).await
    }
}
