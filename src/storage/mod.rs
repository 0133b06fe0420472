use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 查询方法只返回扁平 DTO，关联数据由调用方按需组合。
/// 删除方法在记录不存在时返回 NotFound。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已哈希）
    async fn create_user(&self, user: CreateUserRequest, password_hash: String) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<()>;

    /// 校区 / 教学楼 / 教室
    async fn create_campus(&self, campus: CreateCampusRequest) -> Result<Campus>;
    async fn get_campus_by_id(&self, id: i64) -> Result<Option<Campus>>;
    async fn list_campuses(&self, query: CampusListQuery) -> Result<Vec<Campus>>;
    async fn update_campus(&self, update: UpdateCampusRequest) -> Result<Option<Campus>>;
    async fn delete_campus(&self, id: i64) -> Result<()>;
    async fn create_building(&self, building: CreateBuildingRequest) -> Result<Building>;
    async fn get_building_by_id(&self, id: i64) -> Result<Option<Building>>;
    async fn list_buildings_by_campus(&self, campus_id: i64) -> Result<Vec<Building>>;
    async fn delete_building(&self, id: i64) -> Result<()>;
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room>;
    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>>;
    async fn list_rooms_by_building(&self, building_id: i64) -> Result<Vec<Room>>;
    async fn delete_room(&self, id: i64) -> Result<()>;

    /// 班级组
    async fn create_class_group(&self, group: CreateClassGroupRequest) -> Result<ClassGroup>;
    async fn get_class_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>>;
    async fn list_class_groups(&self, query: ClassGroupListQuery) -> Result<Vec<ClassGroup>>;
    async fn update_class_group(&self, update: UpdateClassGroupRequest)
    -> Result<Option<ClassGroup>>;
    async fn delete_class_group(&self, id: i64) -> Result<()>;

    /// 班级管理方法
    // 创建班级（同一事务内写入教师与科目关联）
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes(&self, query: ClassListQuery) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(&self, update: UpdateClassRequest) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<()>;
    async fn add_class_teacher(&self, class_id: i64, teacher_id: i64) -> Result<()>;
    async fn remove_class_teacher(&self, class_id: i64, teacher_id: i64) -> Result<()>;
    async fn list_class_teachers(&self, class_id: i64) -> Result<Vec<TeacherSummary>>;
    async fn enroll_class_student(&self, class_id: i64, student_id: i64) -> Result<()>;
    async fn unenroll_class_student(&self, class_id: i64, student_id: i64) -> Result<()>;
    async fn list_class_students(&self, class_id: i64) -> Result<Vec<Student>>;
    async fn count_class_students(&self, class_id: i64) -> Result<i64>;
    async fn add_class_subject(&self, class_id: i64, subject_id: i64) -> Result<()>;
    async fn remove_class_subject(&self, class_id: i64, subject_id: i64) -> Result<()>;
    async fn list_class_subjects(&self, class_id: i64) -> Result<Vec<Subject>>;

    /// 教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers(&self, query: TeacherListQuery) -> Result<Vec<Teacher>>;
    async fn update_teacher(&self, update: UpdateTeacherRequest) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<()>;

    /// 学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>>;
    async fn update_student(&self, update: UpdateStudentRequest) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<()>;

    /// 科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects(&self, query: SubjectListQuery) -> Result<Vec<Subject>>;
    async fn update_subject(&self, update: UpdateSubjectRequest) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<()>;

    /// 课表
    async fn create_timetable_slot(&self, slot: CreateTimetableSlotRequest)
    -> Result<TimetableSlot>;
    // 按星期、开始时间排序
    async fn list_timetable_by_class(&self, class_id: i64) -> Result<Vec<TimetableSlot>>;
    async fn delete_timetable_slot(&self, id: i64) -> Result<()>;

    /// 教学活动与提交
    async fn create_activity(&self, activity: CreateActivityRequest) -> Result<Activity>;
    async fn get_activity_by_id(&self, id: i64) -> Result<Option<Activity>>;
    async fn list_activities_by_class(&self, class_id: i64) -> Result<Vec<Activity>>;
    async fn delete_activity(&self, id: i64) -> Result<()>;
    // 同一学生重复登记时覆盖
    async fn upsert_submission(&self, submission: RecordSubmissionRequest)
    -> Result<ActivitySubmission>;
    // 班级内所有已评分提交
    async fn list_scored_submissions(&self, class_id: i64) -> Result<Vec<ScoredSubmission>>;

    /// 考勤
    // 同一学生同一天重复登记时覆盖
    async fn upsert_attendance(&self, request: RecordAttendanceRequest)
    -> Result<Vec<AttendanceRecord>>;
    async fn list_attendance(&self, query: AttendanceQuery) -> Result<Vec<AttendanceRecord>>;

    /// 成绩册
    async fn find_gradebook_by_class(&self, class_id: i64) -> Result<Option<GradebookRecord>>;
    async fn get_gradebook_by_id(&self, id: i64) -> Result<Option<GradebookRecord>>;
    // 在单个事务内创建成绩册及其学期结构、评估阶段与科目记录
    async fn create_gradebook(&self, blueprint: GradebookBlueprint) -> Result<GradebookRecord>;
    async fn get_term_structure(&self, gradebook_id: i64) -> Result<Option<TermStructure>>;
    async fn list_terms(&self, term_structure_id: i64) -> Result<Vec<Term>>;
    async fn list_assessment_periods(&self, term_ids: &[i64]) -> Result<Vec<AssessmentPeriod>>;
    async fn list_subject_records(&self, gradebook_id: i64) -> Result<Vec<SubjectRecord>>;
    async fn update_subject_record(
        &self,
        update: UpdateSubjectRecordRequest,
    ) -> Result<Option<SubjectRecord>>;

    /// 评估体系
    async fn create_assessment_system(
        &self,
        system: CreateAssessmentSystemRequest,
    ) -> Result<AssessmentSystem>;
    async fn get_assessment_system_by_id(&self, id: i64) -> Result<Option<AssessmentSystem>>;
    async fn get_assessment_system_by_name(&self, name: &str)
    -> Result<Option<AssessmentSystem>>;
    async fn find_default_assessment_system(&self) -> Result<Option<AssessmentSystem>>;
    async fn list_assessment_systems(&self) -> Result<Vec<AssessmentSystem>>;

    /// 角色模板
    async fn create_role_template(&self, template: CreateRoleTemplateRequest)
    -> Result<RoleTemplate>;
    async fn get_role_template_by_id(&self, id: i64) -> Result<Option<RoleTemplate>>;
    async fn list_role_templates(&self) -> Result<Vec<RoleTemplate>>;
    async fn delete_role_template(&self, id: i64) -> Result<()>;

    /// 数据库连通性检查
    async fn ping(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
