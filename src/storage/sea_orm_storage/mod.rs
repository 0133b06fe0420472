//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 每个聚合一个文件，`Storage` trait 的实现统一委托到各文件中的 `*_impl` 方法。

mod activities;
mod attendance;
mod campuses;
mod class_groups;
mod classes;
mod gradebooks;
mod role_templates;
mod students;
mod subjects;
mod teachers;
mod timetables;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{DashboardError, Result, is_foreign_key_violation};
use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, DeleteResult};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database.url, &config.database).await
    }

    /// 连接指定数据库并运行迁移
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db).await?;
        info!("SeaORM storage initialized, database: {}", db_url);
        Ok(storage)
    }

    /// 基于已有连接创建（运行迁移）
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None).await.map_err(|e| {
            DashboardError::database_connection(format!("Database migration failed: {e}"))
                .with_cause(e)
        })?;
        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        // 内存库每个连接相互独立，只能使用单连接
        let in_memory = url.contains(":memory:");

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                DashboardError::database_config(format!("Invalid SQLite URL: {e}")).with_cause(e)
            })?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let mut pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { config.pool_size })
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout));
        pool = if in_memory {
            pool.idle_timeout(None).max_lifetime(None)
        } else {
            pool.idle_timeout(Duration::from_secs(300))
        };

        let pool = pool.connect_with(opt).await.map_err(|e| {
            DashboardError::database_connection(format!("SQLite connection failed: {e}"))
                .with_cause(e)
        })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            DashboardError::database_connection(format!("Unable to connect to database: {e}"))
                .with_cause(e)
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(DashboardError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite:, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

impl SeaOrmStorage {
    pub async fn ping_impl(&self) -> Result<()> {
        self.db.ping().await.map_err(db_error("ping database"))
    }
}

/// 将 DbErr 分类为业务错误并附加操作上下文
pub(crate) fn db_error(operation: &'static str) -> impl FnOnce(DbErr) -> DashboardError {
    move |e| DashboardError::from(e).context(operation)
}

/// 删除专用：记录仍被其它表引用（RESTRICT 外键）时返回 Conflict
pub(crate) fn db_delete_error(operation: &'static str) -> impl FnOnce(DbErr) -> DashboardError {
    move |e| {
        if is_foreign_key_violation(&e) {
            DashboardError::conflict("Record is still referenced by other records")
                .with_cause(e)
                .context(operation)
        } else {
            DashboardError::from(e).context(operation)
        }
    }
}

/// 删除未命中任何记录时返回 NotFound
pub(crate) fn ensure_deleted(result: DeleteResult, entity: &str, id: i64) -> Result<()> {
    if result.rows_affected == 0 {
        let message = format!("{entity} {id} not found");
        return Err(DashboardError::not_found(message.clone())
            .with_cause(DbErr::RecordNotFound(message)));
    }
    Ok(())
}

/// 大小写不敏感的子串匹配条件，多列之间为 OR
pub(crate) fn contains_ignore_case(columns: &[&str], search: Option<&str>) -> Option<SimpleExpr> {
    let pattern = crate::utils::sql::contains_pattern(search?)?;
    let clause = columns
        .iter()
        .map(|column| format!("LOWER({column}) LIKE ? ESCAPE '!'"))
        .collect::<Vec<_>>()
        .join(" OR ");
    let values = vec![pattern; columns.len()];
    Some(Expr::cust_with_values(format!("({clause})"), values))
}

// Storage trait 实现
use crate::models::{
    activities::{
        entities::{Activity, ActivitySubmission, ScoredSubmission},
        requests::{CreateActivityRequest, RecordSubmissionRequest},
    },
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceQuery, RecordAttendanceRequest},
    },
    campuses::{
        entities::{Building, Campus, Room},
        requests::{
            CampusListQuery, CreateBuildingRequest, CreateCampusRequest, CreateRoomRequest,
            UpdateCampusRequest,
        },
    },
    class_groups::{
        entities::ClassGroup,
        requests::{ClassGroupListQuery, CreateClassGroupRequest, UpdateClassGroupRequest},
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
    },
    gradebooks::{
        entities::{
            AssessmentPeriod, AssessmentSystem, GradebookBlueprint, GradebookRecord,
            SubjectRecord, Term, TermStructure,
        },
        requests::{CreateAssessmentSystemRequest, UpdateSubjectRecordRequest},
    },
    role_templates::{entities::RoleTemplate, requests::CreateRoleTemplateRequest},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
    },
    teachers::{
        entities::{Teacher, TeacherSummary},
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
    },
    timetables::{entities::TimetableSlot, requests::CreateTimetableSlotRequest},
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: CreateUserRequest, password_hash: String) -> Result<User> {
        self.create_user_impl(user, password_hash).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn update_last_login(&self, id: i64) -> Result<()> {
        self.update_last_login_impl(id).await
    }

    async fn create_campus(&self, campus: CreateCampusRequest) -> Result<Campus> {
        self.create_campus_impl(campus).await
    }

    async fn get_campus_by_id(&self, id: i64) -> Result<Option<Campus>> {
        self.get_campus_by_id_impl(id).await
    }

    async fn list_campuses(&self, query: CampusListQuery) -> Result<Vec<Campus>> {
        self.list_campuses_impl(query).await
    }

    async fn update_campus(&self, update: UpdateCampusRequest) -> Result<Option<Campus>> {
        self.update_campus_impl(update).await
    }

    async fn delete_campus(&self, id: i64) -> Result<()> {
        self.delete_campus_impl(id).await
    }

    async fn create_building(&self, building: CreateBuildingRequest) -> Result<Building> {
        self.create_building_impl(building).await
    }

    async fn get_building_by_id(&self, id: i64) -> Result<Option<Building>> {
        self.get_building_by_id_impl(id).await
    }

    async fn list_buildings_by_campus(&self, campus_id: i64) -> Result<Vec<Building>> {
        self.list_buildings_by_campus_impl(campus_id).await
    }

    async fn delete_building(&self, id: i64) -> Result<()> {
        self.delete_building_impl(id).await
    }

    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room> {
        self.create_room_impl(room).await
    }

    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>> {
        self.get_room_by_id_impl(id).await
    }

    async fn list_rooms_by_building(&self, building_id: i64) -> Result<Vec<Room>> {
        self.list_rooms_by_building_impl(building_id).await
    }

    async fn delete_room(&self, id: i64) -> Result<()> {
        self.delete_room_impl(id).await
    }

    async fn create_class_group(&self, group: CreateClassGroupRequest) -> Result<ClassGroup> {
        self.create_class_group_impl(group).await
    }

    async fn get_class_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>> {
        self.get_class_group_by_id_impl(id).await
    }

    async fn list_class_groups(&self, query: ClassGroupListQuery) -> Result<Vec<ClassGroup>> {
        self.list_class_groups_impl(query).await
    }

    async fn update_class_group(
        &self,
        update: UpdateClassGroupRequest,
    ) -> Result<Option<ClassGroup>> {
        self.update_class_group_impl(update).await
    }

    async fn delete_class_group(&self, id: i64) -> Result<()> {
        self.delete_class_group_impl(id).await
    }

    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes(&self, query: ClassListQuery) -> Result<Vec<Class>> {
        self.list_classes_impl(query).await
    }

    async fn update_class(&self, update: UpdateClassRequest) -> Result<Option<Class>> {
        self.update_class_impl(update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<()> {
        self.delete_class_impl(class_id).await
    }

    async fn add_class_teacher(&self, class_id: i64, teacher_id: i64) -> Result<()> {
        self.add_class_teacher_impl(class_id, teacher_id).await
    }

    async fn remove_class_teacher(&self, class_id: i64, teacher_id: i64) -> Result<()> {
        self.remove_class_teacher_impl(class_id, teacher_id).await
    }

    async fn list_class_teachers(&self, class_id: i64) -> Result<Vec<TeacherSummary>> {
        self.list_class_teachers_impl(class_id).await
    }

    async fn enroll_class_student(&self, class_id: i64, student_id: i64) -> Result<()> {
        self.enroll_class_student_impl(class_id, student_id).await
    }

    async fn unenroll_class_student(&self, class_id: i64, student_id: i64) -> Result<()> {
        self.unenroll_class_student_impl(class_id, student_id).await
    }

    async fn list_class_students(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_class_students_impl(class_id).await
    }

    async fn count_class_students(&self, class_id: i64) -> Result<i64> {
        self.count_class_students_impl(class_id).await
    }

    async fn add_class_subject(&self, class_id: i64, subject_id: i64) -> Result<()> {
        self.add_class_subject_impl(class_id, subject_id).await
    }

    async fn remove_class_subject(&self, class_id: i64, subject_id: i64) -> Result<()> {
        self.remove_class_subject_impl(class_id, subject_id).await
    }

    async fn list_class_subjects(&self, class_id: i64) -> Result<Vec<Subject>> {
        self.list_class_subjects_impl(class_id).await
    }

    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers(&self, query: TeacherListQuery) -> Result<Vec<Teacher>> {
        self.list_teachers_impl(query).await
    }

    async fn update_teacher(&self, update: UpdateTeacherRequest) -> Result<Option<Teacher>> {
        self.update_teacher_impl(update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<()> {
        self.delete_teacher_impl(id).await
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        self.list_students_impl(query).await
    }

    async fn update_student(&self, update: UpdateStudentRequest) -> Result<Option<Student>> {
        self.update_student_impl(update).await
    }

    async fn delete_student(&self, id: i64) -> Result<()> {
        self.delete_student_impl(id).await
    }

    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects(&self, query: SubjectListQuery) -> Result<Vec<Subject>> {
        self.list_subjects_impl(query).await
    }

    async fn update_subject(&self, update: UpdateSubjectRequest) -> Result<Option<Subject>> {
        self.update_subject_impl(update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<()> {
        self.delete_subject_impl(id).await
    }

    async fn create_timetable_slot(
        &self,
        slot: CreateTimetableSlotRequest,
    ) -> Result<TimetableSlot> {
        self.create_timetable_slot_impl(slot).await
    }

    async fn list_timetable_by_class(&self, class_id: i64) -> Result<Vec<TimetableSlot>> {
        self.list_timetable_by_class_impl(class_id).await
    }

    async fn delete_timetable_slot(&self, id: i64) -> Result<()> {
        self.delete_timetable_slot_impl(id).await
    }

    async fn create_activity(&self, activity: CreateActivityRequest) -> Result<Activity> {
        self.create_activity_impl(activity).await
    }

    async fn get_activity_by_id(&self, id: i64) -> Result<Option<Activity>> {
        self.get_activity_by_id_impl(id).await
    }

    async fn list_activities_by_class(&self, class_id: i64) -> Result<Vec<Activity>> {
        self.list_activities_by_class_impl(class_id).await
    }

    async fn delete_activity(&self, id: i64) -> Result<()> {
        self.delete_activity_impl(id).await
    }

    async fn upsert_submission(
        &self,
        submission: RecordSubmissionRequest,
    ) -> Result<ActivitySubmission> {
        self.upsert_submission_impl(submission).await
    }

    async fn list_scored_submissions(&self, class_id: i64) -> Result<Vec<ScoredSubmission>> {
        self.list_scored_submissions_impl(class_id).await
    }

    async fn upsert_attendance(
        &self,
        request: RecordAttendanceRequest,
    ) -> Result<Vec<AttendanceRecord>> {
        self.upsert_attendance_impl(request).await
    }

    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(query).await
    }

    async fn find_gradebook_by_class(&self, class_id: i64) -> Result<Option<GradebookRecord>> {
        self.find_gradebook_by_class_impl(class_id).await
    }

    async fn get_gradebook_by_id(&self, id: i64) -> Result<Option<GradebookRecord>> {
        self.get_gradebook_by_id_impl(id).await
    }

    async fn create_gradebook(&self, blueprint: GradebookBlueprint) -> Result<GradebookRecord> {
        self.create_gradebook_impl(blueprint).await
    }

    async fn get_term_structure(&self, gradebook_id: i64) -> Result<Option<TermStructure>> {
        self.get_term_structure_impl(gradebook_id).await
    }

    async fn list_terms(&self, term_structure_id: i64) -> Result<Vec<Term>> {
        self.list_terms_impl(term_structure_id).await
    }

    async fn list_assessment_periods(&self, term_ids: &[i64]) -> Result<Vec<AssessmentPeriod>> {
        self.list_assessment_periods_impl(term_ids).await
    }

    async fn list_subject_records(&self, gradebook_id: i64) -> Result<Vec<SubjectRecord>> {
        self.list_subject_records_impl(gradebook_id).await
    }

    async fn update_subject_record(
        &self,
        update: UpdateSubjectRecordRequest,
    ) -> Result<Option<SubjectRecord>> {
        self.update_subject_record_impl(update).await
    }

    async fn create_assessment_system(
        &self,
        system: CreateAssessmentSystemRequest,
    ) -> Result<AssessmentSystem> {
        self.create_assessment_system_impl(system).await
    }

    async fn get_assessment_system_by_id(&self, id: i64) -> Result<Option<AssessmentSystem>> {
        self.get_assessment_system_by_id_impl(id).await
    }

    async fn get_assessment_system_by_name(&self, name: &str) -> Result<Option<AssessmentSystem>> {
        self.get_assessment_system_by_name_impl(name).await
    }

    async fn find_default_assessment_system(&self) -> Result<Option<AssessmentSystem>> {
        self.find_default_assessment_system_impl().await
    }

    async fn list_assessment_systems(&self) -> Result<Vec<AssessmentSystem>> {
        self.list_assessment_systems_impl().await
    }

    async fn create_role_template(
        &self,
        template: CreateRoleTemplateRequest,
    ) -> Result<RoleTemplate> {
        self.create_role_template_impl(template).await
    }

    async fn get_role_template_by_id(&self, id: i64) -> Result<Option<RoleTemplate>> {
        self.get_role_template_by_id_impl(id).await
    }

    async fn list_role_templates(&self) -> Result<Vec<RoleTemplate>> {
        self.list_role_templates_impl().await
    }

    async fn delete_role_template(&self, id: i64) -> Result<()> {
        self.delete_role_template_impl(id).await
    }

    async fn ping(&self) -> Result<()> {
        self.ping_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school.db").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert!(SeaOrmStorage::build_database_url("postgres://localhost/school").is_ok());
        assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
    }

    #[test]
    fn test_ensure_deleted() {
        let missing = DeleteResult { rows_affected: 0 };
        let err = ensure_deleted(missing, "Class", 9).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.cause().is_some());
        assert!(ensure_deleted(DeleteResult { rows_affected: 1 }, "Class", 9).is_ok());
    }

    #[test]
    fn test_contains_ignore_case_skips_blank_search() {
        assert!(contains_ignore_case(&["name"], None).is_none());
        assert!(contains_ignore_case(&["name"], Some("  ")).is_none());
        assert!(contains_ignore_case(&["first_name", "last_name"], Some("ann")).is_some());
    }
}
