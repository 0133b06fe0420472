#![allow(dead_code)]

use std::sync::Arc;

use school_dashboard::config::{DatabaseConfig, GradebookConfig};
use school_dashboard::models::RecordStatus;
use school_dashboard::models::campuses::{entities::Campus, requests::CreateCampusRequest};
use school_dashboard::models::class_groups::{
    entities::ClassGroup, requests::CreateClassGroupRequest,
};
use school_dashboard::models::classes::{entities::Class, requests::CreateClassRequest};
use school_dashboard::models::students::{entities::Student, requests::CreateStudentRequest};
use school_dashboard::models::subjects::{entities::Subject, requests::CreateSubjectRequest};
use school_dashboard::models::teachers::{entities::Teacher, requests::CreateTeacherRequest};
use school_dashboard::services::GradebookService;
use school_dashboard::storage::Storage;
use school_dashboard::storage::sea_orm_storage::SeaOrmStorage;

/// 内存 SQLite，已执行迁移
pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config.url, &config)
        .await
        .expect("connect in-memory storage");
    Arc::new(storage)
}

pub fn gradebook_service() -> Arc<GradebookService> {
    Arc::new(GradebookService::new(GradebookConfig::default()))
}

pub async fn seed_campus(storage: &dyn Storage, code: &str) -> Campus {
    storage
        .create_campus(CreateCampusRequest {
            name: format!("Campus {code}"),
            code: code.to_string(),
            address: None,
            status: RecordStatus::Active,
        })
        .await
        .expect("create campus")
}

pub async fn seed_class_group(storage: &dyn Storage, name: &str) -> ClassGroup {
    storage
        .create_class_group(CreateClassGroupRequest {
            name: name.to_string(),
            description: None,
            campus_id: None,
            status: RecordStatus::Active,
        })
        .await
        .expect("create class group")
}

pub async fn seed_subject(storage: &dyn Storage, code: &str, name: &str) -> Subject {
    storage
        .create_subject(CreateSubjectRequest {
            name: name.to_string(),
            code: code.to_string(),
            description: None,
            status: RecordStatus::Active,
        })
        .await
        .expect("create subject")
}

pub async fn seed_teacher(storage: &dyn Storage, first_name: &str, email: &str) -> Teacher {
    storage
        .create_teacher(CreateTeacherRequest {
            first_name: first_name.to_string(),
            last_name: "Teacher".to_string(),
            email: email.to_string(),
            phone: None,
            status: RecordStatus::Active,
            user_id: None,
            profile: None,
        })
        .await
        .expect("create teacher")
}

pub async fn seed_student(storage: &dyn Storage, number: &str, first_name: &str) -> Student {
    storage
        .create_student(CreateStudentRequest {
            student_number: number.to_string(),
            first_name: first_name.to_string(),
            last_name: "Student".to_string(),
            email: None,
            status: RecordStatus::Active,
        })
        .await
        .expect("create student")
}

pub fn class_request(name: &str, group: &ClassGroup, campus: &Campus) -> CreateClassRequest {
    CreateClassRequest {
        name: name.to_string(),
        capacity: 30,
        status: RecordStatus::Active,
        class_group_id: group.id,
        campus_id: campus.id,
        building_id: None,
        room_id: None,
        teacher_ids: vec![],
        subject_ids: vec![],
    }
}

/// 校区、班级组、两门科目、一名教师和一个挂好教师与科目的班级
pub struct SchoolFixture {
    pub campus: Campus,
    pub group: ClassGroup,
    pub math: Subject,
    pub science: Subject,
    pub teacher: Teacher,
    pub class: Class,
}

pub async fn seed_school(storage: &dyn Storage) -> SchoolFixture {
    let campus = seed_campus(storage, "NORTH").await;
    let group = seed_class_group(storage, "Grade 7").await;
    let math = seed_subject(storage, "MATH", "Mathematics").await;
    let science = seed_subject(storage, "SCI", "Science").await;
    let teacher = seed_teacher(storage, "Ada", "ada@school.test").await;

    let mut request = class_request("7A", &group, &campus);
    request.teacher_ids = vec![teacher.id];
    request.subject_ids = vec![math.id, science.id];
    let class = storage.create_class(request).await.expect("create class");

    SchoolFixture {
        campus,
        group,
        math,
        science,
        teacher,
        class,
    }
}
