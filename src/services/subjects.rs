use std::sync::Arc;

use super::FoundExt;
use crate::errors::Result;
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Arc<dyn Storage>,
}

impl SubjectService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateSubjectRequest) -> Result<Subject> {
        request.validate()?;
        self.storage.create_subject(request).await
    }

    pub async fn get(&self, id: i64) -> Result<Subject> {
        self.storage.get_subject_by_id(id).await?.or_not_found("Subject", id)
    }

    pub async fn list(&self, query: SubjectListQuery) -> Result<Vec<Subject>> {
        self.storage.list_subjects(query).await
    }

    pub async fn update(&self, request: UpdateSubjectRequest) -> Result<Subject> {
        request.validate()?;
        let id = request.id;
        self.storage
            .update_subject(request)
            .await?
            .or_not_found("Subject", id)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_subject(id).await
    }

    // 班级开设的科目
    pub async fn list_by_class(&self, class_id: i64) -> Result<Vec<Subject>> {
        self.storage
            .get_class_by_id(class_id)
            .await?
            .or_not_found("Class", class_id)?;
        self.storage.list_class_subjects(class_id).await
    }
}
