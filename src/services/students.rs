use std::sync::Arc;

use super::FoundExt;
use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateStudentRequest) -> Result<Student> {
        request.validate()?;
        self.storage.create_student(request).await
    }

    pub async fn get(&self, id: i64) -> Result<Student> {
        self.storage.get_student_by_id(id).await?.or_not_found("Student", id)
    }

    pub async fn list(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        self.storage.list_students(query).await
    }

    pub async fn update(&self, request: UpdateStudentRequest) -> Result<Student> {
        request.validate()?;
        let id = request.id;
        self.storage
            .update_student(request)
            .await?
            .or_not_found("Student", id)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_student(id).await
    }
}
