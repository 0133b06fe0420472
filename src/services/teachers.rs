use std::sync::Arc;

use tracing::info;

use super::FoundExt;
use crate::errors::Result;
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Arc<dyn Storage>,
}

impl TeacherService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateTeacherRequest) -> Result<Teacher> {
        request.validate()?;
        if let Some(user_id) = request.user_id {
            self.storage
                .get_user_by_id(user_id)
                .await?
                .or_invalid_reference("User", user_id)?;
        }

        let teacher = self.storage.create_teacher(request).await?;
        info!("Teacher {} created", teacher.id);
        Ok(teacher)
    }

    // 教师及其资料（资料可能不存在）
    pub async fn get(&self, id: i64) -> Result<Teacher> {
        self.storage.get_teacher_by_id(id).await?.or_not_found("Teacher", id)
    }

    pub async fn list(&self, query: TeacherListQuery) -> Result<Vec<Teacher>> {
        self.storage.list_teachers(query).await
    }

    pub async fn update(&self, request: UpdateTeacherRequest) -> Result<Teacher> {
        request.validate()?;
        let id = request.id;
        self.storage
            .update_teacher(request)
            .await?
            .or_not_found("Teacher", id)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_teacher(id).await
    }
}
