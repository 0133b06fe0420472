mod common;

use school_dashboard::models::RecordStatus;
use school_dashboard::models::auth::Caller;
use school_dashboard::models::pages::PageState;
use school_dashboard::models::users::entities::UserRole;
use school_dashboard::services::PageService;

use common::{gradebook_service, memory_storage, seed_school};

fn caller(role: UserRole) -> Caller {
    Caller {
        user_id: 1,
        username: "someone".to_string(),
        role,
    }
}

#[tokio::test]
async fn teacher_without_profile_renders_empty_form_defaults() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let pages = PageService::new(storage.clone(), gradebook_service());

    let page = pages
        .teacher_edit(&caller(UserRole::Admin), "admin", school.teacher.id)
        .await;
    let PageState::Success { data } = page else {
        panic!("expected success page, got {page:?}");
    };

    assert_eq!(data.role, UserRole::Admin);
    assert_eq!(data.form.first_name, "Ada");
    assert_eq!(data.form.status, RecordStatus::Active);
    assert_eq!(data.form.phone, "");
    assert_eq!(data.form.teacher_type, "");
    assert_eq!(data.form.specialization, "");
    assert!(data.form.subject_ids.is_empty());
    assert!(data.form.class_ids.is_empty());
    assert!(data.form.campus_ids.is_empty());

    assert_eq!(data.subject_options.len(), 2);
    assert_eq!(data.class_options.len(), 1);
    assert_eq!(data.class_options[0].value, school.class.id);
    assert_eq!(data.campus_options.len(), 1);
}

#[tokio::test]
async fn missing_entities_and_foreign_roles_render_not_found() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let pages = PageService::new(storage.clone(), gradebook_service());

    let page = pages
        .teacher_edit(&caller(UserRole::Admin), "admin", 9999)
        .await;
    assert_eq!(page.state(), "not_found");

    let page = pages
        .class_edit(&caller(UserRole::Admin), "principal", school.class.id)
        .await;
    assert_eq!(page.state(), "not_found");

    // 非管理员不能访问其它角色的页面
    let page = pages
        .gradebook(&caller(UserRole::Teacher), "admin", school.class.id)
        .await;
    assert_eq!(page.state(), "not_found");

    let page = pages
        .class_detail(&caller(UserRole::Teacher), "teacher", 9999)
        .await;
    assert_eq!(page.state(), "not_found");
}

#[tokio::test]
async fn class_detail_page_initializes_the_gradebook_lazily() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let pages = PageService::new(storage.clone(), gradebook_service());

    let page = pages
        .class_detail(&caller(UserRole::Teacher), "teacher", school.class.id)
        .await;
    let PageState::Success { data } = page else {
        panic!("expected success page, got {page:?}");
    };

    assert_eq!(data.role, UserRole::Teacher);
    assert_eq!(data.class.class.id, school.class.id);
    assert_eq!(data.gradebook.class_id, school.class.id);
    assert_eq!(data.gradebook.subject_records.len(), 2);
    assert!(data.attendance.days.is_empty());
    assert!(data.performance.subjects.is_empty());

    let stored = storage
        .find_gradebook_by_class(school.class.id)
        .await
        .expect("find gradebook")
        .expect("gradebook was created");
    assert_eq!(stored.id, data.gradebook.id);
}

#[tokio::test]
async fn class_edit_page_lists_current_selection_and_options() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let pages = PageService::new(storage.clone(), gradebook_service());

    let page = pages
        .class_edit(&caller(UserRole::Admin), "admin", school.class.id)
        .await;
    let PageState::Success { data } = page else {
        panic!("expected success page, got {page:?}");
    };

    assert_eq!(data.form.name, "7A");
    assert_eq!(data.form.class_group_id, school.group.id);
    assert_eq!(data.form.campus_id, school.campus.id);
    assert_eq!(data.form.teacher_ids, vec![school.teacher.id]);
    assert_eq!(data.class_group_options.len(), 1);
    assert_eq!(data.teacher_options.len(), 1);
}
