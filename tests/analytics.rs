mod common;

use chrono::NaiveDate;

use school_dashboard::config::AnalyticsConfig;
use school_dashboard::errors::ErrorKind;
use school_dashboard::models::activities::requests::{
    CreateActivityRequest, RecordSubmissionRequest,
};
use school_dashboard::models::attendance::entities::AttendanceStatus;
use school_dashboard::models::attendance::requests::{
    AttendanceEntry, AttendanceQuery, RecordAttendanceRequest,
};
use school_dashboard::models::classes::requests::ClassStudentRequest;
use school_dashboard::models::students::entities::Student;
use school_dashboard::services::{
    ActivityService, AnalyticsService, AttendanceService, ClassService,
};
use school_dashboard::storage::Storage;

use common::{memory_storage, seed_school, seed_student};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date")
}

fn entry(student: &Student, status: AttendanceStatus) -> AttendanceEntry {
    AttendanceEntry {
        student_id: student.id,
        status,
        remarks: None,
    }
}

async fn enroll_four(storage: &std::sync::Arc<dyn Storage>, class_id: i64) -> Vec<Student> {
    let classes = ClassService::new(storage.clone());
    let mut students = Vec::new();
    for (i, name) in ["Grace", "Alan", "Edsger", "Barbara"].iter().enumerate() {
        let student = seed_student(storage.as_ref(), &format!("S-{i:03}"), name).await;
        classes
            .enroll_student(ClassStudentRequest {
                class_id,
                student_id: student.id,
            })
            .await
            .expect("enroll student");
        students.push(student);
    }
    students
}

#[tokio::test]
async fn attendance_trend_averages_daily_rates() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let students = enroll_four(&storage, school.class.id).await;
    let attendance = AttendanceService::new(storage.clone());

    attendance
        .record(RecordAttendanceRequest {
            class_id: school.class.id,
            date: date(3),
            entries: vec![
                entry(&students[0], AttendanceStatus::Present),
                entry(&students[1], AttendanceStatus::Present),
                entry(&students[2], AttendanceStatus::Present),
                entry(&students[3], AttendanceStatus::Absent),
            ],
        })
        .await
        .expect("record first day");
    attendance
        .record(RecordAttendanceRequest {
            class_id: school.class.id,
            date: date(4),
            entries: vec![
                entry(&students[0], AttendanceStatus::Present),
                entry(&students[1], AttendanceStatus::Late),
                entry(&students[2], AttendanceStatus::Absent),
                entry(&students[3], AttendanceStatus::Absent),
            ],
        })
        .await
        .expect("record second day");

    let analytics = AnalyticsService::with_config(
        storage.clone(),
        &AnalyticsConfig {
            late_counts_as_present: true,
        },
    );
    let trend = analytics
        .attendance_trend(AttendanceQuery::for_class(school.class.id))
        .await
        .expect("attendance trend");
    assert_eq!(trend.days.len(), 2);
    assert_eq!(trend.days[0].date, date(3));
    assert_eq!(trend.days[0].rate, 75.0);
    assert_eq!(trend.days[1].rate, 50.0);
    assert_eq!(trend.average_rate, 62.5);

    // 迟到不计出勤
    let strict = AnalyticsService::with_config(
        storage.clone(),
        &AnalyticsConfig {
            late_counts_as_present: false,
        },
    );
    let trend = strict
        .attendance_trend(AttendanceQuery {
            class_id: school.class.id,
            from: Some(date(4)),
            to: Some(date(4)),
        })
        .await
        .expect("strict attendance trend");
    assert_eq!(trend.days.len(), 1);
    assert_eq!(trend.days[0].rate, 25.0);
    assert_eq!(trend.average_rate, 25.0);
}

#[tokio::test]
async fn rerecording_attendance_replaces_the_status() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let students = enroll_four(&storage, school.class.id).await;
    let attendance = AttendanceService::new(storage.clone());

    for status in [AttendanceStatus::Absent, AttendanceStatus::Present] {
        attendance
            .record(RecordAttendanceRequest {
                class_id: school.class.id,
                date: date(10),
                entries: vec![entry(&students[0], status)],
            })
            .await
            .expect("record attendance");
    }

    let records = attendance
        .list(AttendanceQuery::for_class(school.class.id))
        .await
        .expect("list attendance");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Present);

    let outsider = seed_student(storage.as_ref(), "S-999", "Outsider").await;
    let err = attendance
        .record(RecordAttendanceRequest {
            class_id: school.class.id,
            date: date(10),
            entries: vec![entry(&outsider, AttendanceStatus::Present)],
        })
        .await
        .expect_err("student not enrolled");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn empty_class_has_zero_trend_and_no_performance() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let analytics = AnalyticsService::with_config(storage.clone(), &AnalyticsConfig::default());

    let trend = analytics
        .attendance_trend(AttendanceQuery::for_class(school.class.id))
        .await
        .expect("attendance trend");
    assert!(trend.days.is_empty());
    assert_eq!(trend.average_rate, 0.0);

    let report = analytics
        .performance_by_subject(school.class.id)
        .await
        .expect("performance report");
    assert!(report.subjects.is_empty());

    let err = analytics
        .performance_by_subject(777)
        .await
        .expect_err("unknown class");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn performance_averages_submission_percentages_per_subject() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    let students = enroll_four(&storage, school.class.id).await;
    let activities = ActivityService::new(storage.clone());

    let quiz = activities
        .create(CreateActivityRequest {
            class_id: school.class.id,
            subject_id: school.math.id,
            title: "Fractions quiz".to_string(),
            max_score: 20.0,
            due_date: None,
        })
        .await
        .expect("create activity");

    for (student, score) in [(&students[0], 18.0), (&students[1], 12.0)] {
        activities
            .record_submission(RecordSubmissionRequest {
                activity_id: quiz.id,
                student_id: student.id,
                score,
                feedback: None,
            })
            .await
            .expect("record submission");
    }

    let err = activities
        .record_submission(RecordSubmissionRequest {
            activity_id: quiz.id,
            student_id: students[2].id,
            score: 25.0,
            feedback: None,
        })
        .await
        .expect_err("score above maximum");
    assert_eq!(err.kind(), ErrorKind::Validation);

    let report = AnalyticsService::with_config(storage.clone(), &AnalyticsConfig::default())
        .performance_by_subject(school.class.id)
        .await
        .expect("performance report");
    assert_eq!(report.subjects.len(), 1);
    let math = &report.subjects[0];
    assert_eq!(math.subject_id, school.math.id);
    assert_eq!(math.subject_name.as_deref(), Some("Mathematics"));
    assert_eq!(math.submission_count, 2);
    assert_eq!(math.average_percentage, 75.0);
}
