use super::ClassService;
use crate::errors::{DashboardError, Result};
use crate::models::classes::requests::{
    ClassStudentRequest, ClassSubjectRequest, ClassTeacherRequest,
};
use crate::services::FoundExt;

pub async fn assign_teacher(service: &ClassService, request: ClassTeacherRequest) -> Result<()> {
    service.get(request.class_id).await?;
    service
        .storage
        .get_teacher_by_id(request.teacher_id)
        .await?
        .or_invalid_reference("Teacher", request.teacher_id)?;

    service
        .storage
        .add_class_teacher(request.class_id, request.teacher_id)
        .await
}

// 人数达到班级容量时拒绝报名
pub async fn enroll_student(service: &ClassService, request: ClassStudentRequest) -> Result<()> {
    let class = service.get(request.class_id).await?;
    service
        .storage
        .get_student_by_id(request.student_id)
        .await?
        .or_invalid_reference("Student", request.student_id)?;

    let enrolled = service.storage.count_class_students(class.id).await?;
    if enrolled >= i64::from(class.capacity) {
        return Err(DashboardError::conflict(format!(
            "Class {} is full ({} students)",
            class.id, class.capacity
        )));
    }

    service
        .storage
        .enroll_class_student(request.class_id, request.student_id)
        .await
}

pub async fn add_subject(service: &ClassService, request: ClassSubjectRequest) -> Result<()> {
    service.get(request.class_id).await?;
    service
        .storage
        .get_subject_by_id(request.subject_id)
        .await?
        .or_invalid_reference("Subject", request.subject_id)?;

    service
        .storage
        .add_class_subject(request.class_id, request.subject_id)
        .await
}
