use std::sync::Arc;

use super::FoundExt;
use crate::errors::Result;
use crate::models::class_groups::{
    entities::ClassGroup,
    requests::{ClassGroupListQuery, CreateClassGroupRequest, UpdateClassGroupRequest},
};
use crate::storage::Storage;

pub struct ClassGroupService {
    storage: Arc<dyn Storage>,
}

impl ClassGroupService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateClassGroupRequest) -> Result<ClassGroup> {
        request.validate()?;
        if let Some(campus_id) = request.campus_id {
            self.storage
                .get_campus_by_id(campus_id)
                .await?
                .or_invalid_reference("Campus", campus_id)?;
        }
        self.storage.create_class_group(request).await
    }

    pub async fn get(&self, id: i64) -> Result<ClassGroup> {
        self.storage
            .get_class_group_by_id(id)
            .await?
            .or_not_found("Class group", id)
    }

    pub async fn list(&self, query: ClassGroupListQuery) -> Result<Vec<ClassGroup>> {
        self.storage.list_class_groups(query).await
    }

    pub async fn update(&self, request: UpdateClassGroupRequest) -> Result<ClassGroup> {
        request.validate()?;
        let id = request.id;
        self.storage
            .update_class_group(request)
            .await?
            .or_not_found("Class group", id)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_class_group(id).await
    }
}
