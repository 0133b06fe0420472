mod common;

use school_dashboard::errors::ErrorKind;
use school_dashboard::models::RecordStatus;
use school_dashboard::models::classes::requests::{
    ClassListQuery, ClassStudentRequest, UpdateClassRequest,
};
use school_dashboard::services::ClassService;
use school_dashboard::storage::Storage;

use common::{class_request, memory_storage, seed_school, seed_student};

#[tokio::test]
async fn class_detail_carries_flat_relation_summaries() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let service = ClassService::new(storage.clone());

    let student = seed_student(storage.as_ref(), "S-001", "Grace").await;
    service
        .enroll_student(ClassStudentRequest {
            class_id: school.class.id,
            student_id: student.id,
        })
        .await
        .expect("enroll student");

    let detail = service.detail(school.class.id).await.expect("class detail");
    assert_eq!(detail.class.name, "7A");
    assert_eq!(detail.class_group.id, school.group.id);
    assert_eq!(detail.class_group.name, "Grade 7");
    assert_eq!(detail.campus.id, school.campus.id);
    assert!(detail.building.is_none());
    assert!(detail.room.is_none());
    assert_eq!(detail.student_count, 1);
    assert_eq!(detail.teachers.len(), 1);
    assert_eq!(detail.teachers[0].id, school.teacher.id);

    let mut subject_ids: Vec<i64> = detail.subjects.iter().map(|s| s.id).collect();
    subject_ids.sort_unstable();
    let mut expected = vec![school.math.id, school.science.id];
    expected.sort_unstable();
    assert_eq!(subject_ids, expected);
}

#[tokio::test]
async fn class_list_defaults_to_active_and_searches_case_insensitively() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let service = ClassService::new(storage.clone());

    let mut archived = class_request("7B Archive", &school.group, &school.campus);
    archived.status = RecordStatus::Archived;
    service.create(archived).await.expect("create archived class");
    service
        .create(class_request("8C", &school.group, &school.campus))
        .await
        .expect("create second class");

    let active = service
        .list(ClassListQuery::default())
        .await
        .expect("list classes");
    let names: Vec<&str> = active.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(active.len(), 2);
    assert!(names.contains(&"7A"));
    assert!(names.contains(&"8C"));

    let archived = service
        .list(ClassListQuery {
            status: Some(RecordStatus::Archived),
            search: Some("archive".to_string()),
            ..Default::default()
        })
        .await
        .expect("list archived classes");
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].name, "7B Archive");

    let searched = service
        .list(ClassListQuery {
            search: Some("7a".to_string()),
            ..Default::default()
        })
        .await
        .expect("search classes");
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].id, school.class.id);
}

#[tokio::test]
async fn missing_class_is_not_found_and_missing_reference_is_validation() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let service = ClassService::new(storage.clone());

    let err = service.delete(9999).await.expect_err("delete missing class");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service
        .update(UpdateClassRequest {
            id: 9999,
            name: Some("Nope".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("update missing class");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let mut bad_group = class_request("9Z", &school.group, &school.campus);
    bad_group.class_group_id = 9999;
    let err = service.create(bad_group).await.expect_err("unknown group");
    assert_eq!(err.kind(), ErrorKind::Validation);

    service
        .delete(school.class.id)
        .await
        .expect("delete existing class");
    let err = service.get(school.class.id).await.expect_err("deleted class");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn enrolling_past_capacity_conflicts() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let service = ClassService::new(storage.clone());

    service
        .update(UpdateClassRequest {
            id: school.class.id,
            capacity: Some(1),
            ..Default::default()
        })
        .await
        .expect("shrink class");

    let first = seed_student(storage.as_ref(), "S-001", "Grace").await;
    let second = seed_student(storage.as_ref(), "S-002", "Alan").await;

    service
        .enroll_student(ClassStudentRequest {
            class_id: school.class.id,
            student_id: first.id,
        })
        .await
        .expect("enroll first student");

    let err = service
        .enroll_student(ClassStudentRequest {
            class_id: school.class.id,
            student_id: second.id,
        })
        .await
        .expect_err("class is full");
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn deleting_a_referenced_campus_or_group_conflicts() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;

    let err = storage
        .delete_campus(school.campus.id)
        .await
        .expect_err("campus still has classes");
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(err.cause().is_some());

    let err = storage
        .delete_class_group(school.group.id)
        .await
        .expect_err("class group still has classes");
    assert_eq!(err.kind(), ErrorKind::Conflict);

    ClassService::new(storage.clone())
        .delete(school.class.id)
        .await
        .expect("delete class");
    storage
        .delete_campus(school.campus.id)
        .await
        .expect("campus is free once its classes are gone");
}
