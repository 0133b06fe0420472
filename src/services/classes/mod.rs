pub mod create;
pub mod detail;
pub mod members;
pub mod update;

use std::sync::Arc;

use super::FoundExt;
use crate::errors::Result;
use crate::models::classes::{
    entities::{Class, ClassDetail},
    requests::{
        ClassListQuery, ClassStudentRequest, ClassSubjectRequest, ClassTeacherRequest,
        CreateClassRequest, UpdateClassRequest,
    },
};
use crate::models::students::entities::Student;
use crate::storage::Storage;

pub struct ClassService {
    storage: Arc<dyn Storage>,
}

impl ClassService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, request: CreateClassRequest) -> Result<Class> {
        create::create_class(self, request).await
    }

    pub async fn get(&self, class_id: i64) -> Result<Class> {
        self.storage
            .get_class_by_id(class_id)
            .await?
            .or_not_found("Class", class_id)
    }

    // 班级详情，关联数据只展开一层
    pub async fn detail(&self, class_id: i64) -> Result<ClassDetail> {
        detail::class_detail(self, class_id).await
    }

    // 未指定状态时只返回 active 班级
    pub async fn list(&self, query: ClassListQuery) -> Result<Vec<Class>> {
        self.storage.list_classes(query).await
    }

    pub async fn update(&self, request: UpdateClassRequest) -> Result<Class> {
        update::update_class(self, request).await
    }

    pub async fn delete(&self, class_id: i64) -> Result<()> {
        self.storage.delete_class(class_id).await
    }

    pub async fn assign_teacher(&self, request: ClassTeacherRequest) -> Result<()> {
        members::assign_teacher(self, request).await
    }

    pub async fn remove_teacher(&self, request: ClassTeacherRequest) -> Result<()> {
        self.storage
            .remove_class_teacher(request.class_id, request.teacher_id)
            .await
    }

    pub async fn enroll_student(&self, request: ClassStudentRequest) -> Result<()> {
        members::enroll_student(self, request).await
    }

    pub async fn unenroll_student(&self, request: ClassStudentRequest) -> Result<()> {
        self.storage
            .unenroll_class_student(request.class_id, request.student_id)
            .await
    }

    pub async fn list_students(&self, class_id: i64) -> Result<Vec<Student>> {
        self.get(class_id).await?;
        self.storage.list_class_students(class_id).await
    }

    pub async fn add_subject(&self, request: ClassSubjectRequest) -> Result<()> {
        members::add_subject(self, request).await
    }

    pub async fn remove_subject(&self, request: ClassSubjectRequest) -> Result<()> {
        self.storage
            .remove_class_subject(request.class_id, request.subject_id)
            .await
    }
}
