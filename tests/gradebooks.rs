mod common;

use school_dashboard::errors::ErrorKind;
use school_dashboard::models::gradebooks::requests::UpdateSubjectRecordRequest;

use common::{gradebook_service, memory_storage, seed_school};

#[tokio::test]
async fn first_read_initializes_a_complete_gradebook() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let gradebooks = gradebook_service();

    assert!(
        storage
            .find_gradebook_by_class(school.class.id)
            .await
            .expect("find gradebook")
            .is_none()
    );

    let lookup = gradebooks
        .get_or_initialize(storage.as_ref(), school.class.id)
        .await
        .expect("initialize gradebook");
    assert!(lookup.initialized);

    let gradebook = lookup.gradebook;
    assert_eq!(gradebook.class_id, school.class.id);
    assert_eq!(gradebook.assessment_system.name, "Percentage");
    assert!(gradebook.assessment_system.is_default);
    assert_eq!(gradebook.terms.len(), 3);
    assert!(gradebook.is_fully_populated());
    assert_eq!(gradebook.terms[0].term.name, "Term 1");
    for term in &gradebook.terms {
        assert_eq!(term.periods.len(), 2);
        let total: f64 = term.periods.iter().map(|p| p.weight).sum();
        assert!((total - 100.0).abs() < 0.01);
    }

    let mut subjects: Vec<i64> = gradebook
        .subject_records
        .iter()
        .map(|r| r.subject_id)
        .collect();
    subjects.sort_unstable();
    let mut expected = vec![school.math.id, school.science.id];
    expected.sort_unstable();
    assert_eq!(subjects, expected);
    assert!(gradebook.subject_records.iter().all(|r| r.score.is_none()));

    // 第二次读取复用已有成绩册
    let again = gradebooks
        .get_or_initialize(storage.as_ref(), school.class.id)
        .await
        .expect("read gradebook");
    assert!(!again.initialized);
    assert_eq!(again.gradebook.id, gradebook.id);
}

#[tokio::test]
async fn concurrent_reads_create_exactly_one_gradebook() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let gradebooks = gradebook_service();

    let (a, b, c) = tokio::join!(
        gradebooks.get_or_initialize(storage.as_ref(), school.class.id),
        gradebooks.get_or_initialize(storage.as_ref(), school.class.id),
        gradebooks.get_or_initialize(storage.as_ref(), school.class.id),
    );
    let lookups = [
        a.expect("first read"),
        b.expect("second read"),
        c.expect("third read"),
    ];

    assert_eq!(lookups.iter().filter(|l| l.initialized).count(), 1);
    let id = lookups[0].gradebook.id;
    assert!(lookups.iter().all(|l| l.gradebook.id == id));
    assert_eq!(
        storage
            .list_assessment_systems()
            .await
            .expect("list assessment systems")
            .len(),
        1
    );
    assert_eq!(gradebooks.lock_count(), 0);
}

#[tokio::test]
async fn unknown_class_is_not_found() {
    let storage = memory_storage().await;
    let gradebooks = gradebook_service();

    let err = gradebooks
        .get_or_initialize(storage.as_ref(), 4242)
        .await
        .expect_err("class does not exist");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn subject_record_scores_respect_the_assessment_system() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let gradebooks = gradebook_service();

    let gradebook = gradebooks
        .get_or_initialize(storage.as_ref(), school.class.id)
        .await
        .expect("initialize gradebook")
        .gradebook;

    let record = gradebooks
        .update_subject_record(
            storage.as_ref(),
            UpdateSubjectRecordRequest {
                gradebook_id: gradebook.id,
                subject_id: school.math.id,
                score: Some(87.5),
                grade: Some("A".to_string()),
                remarks: None,
            },
        )
        .await
        .expect("update subject record");
    assert_eq!(record.score, Some(87.5));
    assert_eq!(record.grade.as_deref(), Some("A"));

    let err = gradebooks
        .update_subject_record(
            storage.as_ref(),
            UpdateSubjectRecordRequest {
                gradebook_id: gradebook.id,
                subject_id: school.math.id,
                score: Some(120.0),
                grade: None,
                remarks: None,
            },
        )
        .await
        .expect_err("score above maximum");
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = gradebooks
        .update_subject_record(
            storage.as_ref(),
            UpdateSubjectRecordRequest {
                gradebook_id: gradebook.id,
                subject_id: 9999,
                score: Some(50.0),
                grade: None,
                remarks: None,
            },
        )
        .await
        .expect_err("subject without record");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn subject_record_update_keeps_omitted_fields() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let gradebooks = gradebook_service();

    let gradebook = gradebooks
        .get_or_initialize(storage.as_ref(), school.class.id)
        .await
        .expect("initialize gradebook")
        .gradebook;

    let update = |score: Option<f64>, grade: Option<&str>, remarks: Option<&str>| {
        UpdateSubjectRecordRequest {
            gradebook_id: gradebook.id,
            subject_id: school.math.id,
            score,
            grade: grade.map(str::to_string),
            remarks: remarks.map(str::to_string),
        }
    };

    gradebooks
        .update_subject_record(storage.as_ref(), update(Some(87.5), Some("A"), None))
        .await
        .expect("record score and grade");

    let record = gradebooks
        .update_subject_record(storage.as_ref(), update(None, None, Some("well done")))
        .await
        .expect("add remarks only");
    assert_eq!(record.score, Some(87.5));
    assert_eq!(record.grade.as_deref(), Some("A"));
    assert_eq!(record.remarks.as_deref(), Some("well done"));

    let record = gradebooks
        .update_subject_record(storage.as_ref(), update(None, Some(""), None))
        .await
        .expect("clear grade");
    assert_eq!(record.score, Some(87.5));
    assert!(record.grade.is_none());
    assert_eq!(record.remarks.as_deref(), Some("well done"));
}
