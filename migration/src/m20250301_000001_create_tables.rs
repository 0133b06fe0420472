use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 自增主键列
fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

// 时间戳列（秒）
fn ts_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).big_integer().not_null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ts_col(Users::CreatedAt))
                    .col(ts_col(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 创建校区表
        manager
            .create_table(
                Table::create()
                    .table(Campuses::Table)
                    .if_not_exists()
                    .col(id_col(Campuses::Id))
                    .col(ColumnDef::new(Campuses::Name).string().not_null())
                    .col(
                        ColumnDef::new(Campuses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Campuses::Address).text().null())
                    .col(ColumnDef::new(Campuses::Status).string().not_null())
                    .col(ts_col(Campuses::CreatedAt))
                    .col(ts_col(Campuses::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 创建教学楼表
        manager
            .create_table(
                Table::create()
                    .table(Buildings::Table)
                    .if_not_exists()
                    .col(id_col(Buildings::Id))
                    .col(ColumnDef::new(Buildings::CampusId).big_integer().not_null())
                    .col(ColumnDef::new(Buildings::Name).string().not_null())
                    .col(ColumnDef::new(Buildings::Code).string().null())
                    .col(ts_col(Buildings::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Buildings::Table, Buildings::CampusId)
                            .to(Campuses::Table, Campuses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教室表
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(id_col(Rooms::Id))
                    .col(ColumnDef::new(Rooms::BuildingId).big_integer().not_null())
                    .col(ColumnDef::new(Rooms::Name).string().not_null())
                    .col(ColumnDef::new(Rooms::Capacity).integer().null())
                    .col(ts_col(Rooms::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rooms::Table, Rooms::BuildingId)
                            .to(Buildings::Table, Buildings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级组表
        manager
            .create_table(
                Table::create()
                    .table(ClassGroups::Table)
                    .if_not_exists()
                    .col(id_col(ClassGroups::Id))
                    .col(
                        ColumnDef::new(ClassGroups::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ClassGroups::Description).text().null())
                    .col(ColumnDef::new(ClassGroups::CampusId).big_integer().null())
                    .col(ColumnDef::new(ClassGroups::Status).string().not_null())
                    .col(ts_col(ClassGroups::CreatedAt))
                    .col(ts_col(ClassGroups::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassGroups::Table, ClassGroups::CampusId)
                            .to(Campuses::Table, Campuses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(id_col(Classes::Id))
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(ColumnDef::new(Classes::Capacity).integer().not_null())
                    .col(ColumnDef::new(Classes::Status).string().not_null())
                    .col(
                        ColumnDef::new(Classes::ClassGroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Classes::CampusId).big_integer().not_null())
                    .col(ColumnDef::new(Classes::BuildingId).big_integer().null())
                    .col(ColumnDef::new(Classes::RoomId).big_integer().null())
                    .col(ts_col(Classes::CreatedAt))
                    .col(ts_col(Classes::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::ClassGroupId)
                            .to(ClassGroups::Table, ClassGroups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::CampusId)
                            .to(Campuses::Table, Campuses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::BuildingId)
                            .to(Buildings::Table, Buildings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(id_col(Teachers::Id))
                    .col(ColumnDef::new(Teachers::UserId).big_integer().null())
                    .col(ColumnDef::new(Teachers::FirstName).string().not_null())
                    .col(ColumnDef::new(Teachers::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Phone).string().null())
                    .col(ColumnDef::new(Teachers::Status).string().not_null())
                    .col(ts_col(Teachers::CreatedAt))
                    .col(ts_col(Teachers::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师档案表（与教师一对一）
        manager
            .create_table(
                Table::create()
                    .table(TeacherProfiles::Table)
                    .if_not_exists()
                    .col(id_col(TeacherProfiles::Id))
                    .col(
                        ColumnDef::new(TeacherProfiles::TeacherId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::TeacherType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::Specialization)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TeacherProfiles::SubjectIds)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherProfiles::ClassIds).text().not_null())
                    .col(
                        ColumnDef::new(TeacherProfiles::CampusIds)
                            .text()
                            .not_null(),
                    )
                    .col(ts_col(TeacherProfiles::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherProfiles::Table, TeacherProfiles::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(id_col(Students::Id))
                    .col(
                        ColumnDef::new(Students::StudentNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Status).string().not_null())
                    .col(ts_col(Students::CreatedAt))
                    .col(ts_col(Students::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(id_col(Subjects::Id))
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subjects::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::Description).text().null())
                    .col(ColumnDef::new(Subjects::Status).string().not_null())
                    .col(ts_col(Subjects::CreatedAt))
                    .col(ts_col(Subjects::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // 班级-教师关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassTeachers::Table)
                    .if_not_exists()
                    .col(id_col(ClassTeachers::Id))
                    .col(
                        ColumnDef::new(ClassTeachers::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassTeachers::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ts_col(ClassTeachers::AssignedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassTeachers::Table, ClassTeachers::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassTeachers::Table, ClassTeachers::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 班级-学生关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassStudents::Table)
                    .if_not_exists()
                    .col(id_col(ClassStudents::Id))
                    .col(
                        ColumnDef::new(ClassStudents::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ts_col(ClassStudents::EnrolledAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassStudents::Table, ClassStudents::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassStudents::Table, ClassStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 班级-科目关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassSubjects::Table)
                    .if_not_exists()
                    .col(id_col(ClassSubjects::Id))
                    .col(
                        ColumnDef::new(ClassSubjects::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ts_col(ClassSubjects::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSubjects::Table, ClassSubjects::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSubjects::Table, ClassSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程表
        manager
            .create_table(
                Table::create()
                    .table(Timetables::Table)
                    .if_not_exists()
                    .col(id_col(Timetables::Id))
                    .col(ColumnDef::new(Timetables::ClassId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Timetables::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Timetables::TeacherId).big_integer().null())
                    .col(ColumnDef::new(Timetables::RoomId).big_integer().null())
                    .col(ColumnDef::new(Timetables::DayOfWeek).integer().not_null())
                    .col(ColumnDef::new(Timetables::StartTime).string().not_null())
                    .col(ColumnDef::new(Timetables::EndTime).string().not_null())
                    .col(ts_col(Timetables::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Timetables::Table, Timetables::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Timetables::Table, Timetables::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Timetables::Table, Timetables::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Timetables::Table, Timetables::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 课堂活动表
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(id_col(Activities::Id))
                    .col(ColumnDef::new(Activities::ClassId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Activities::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Activities::Title).string().not_null())
                    .col(ColumnDef::new(Activities::MaxScore).double().not_null())
                    .col(ColumnDef::new(Activities::DueDate).string().null())
                    .col(ts_col(Activities::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Activities::Table, Activities::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Activities::Table, Activities::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 活动提交表
        manager
            .create_table(
                Table::create()
                    .table(ActivitySubmissions::Table)
                    .if_not_exists()
                    .col(id_col(ActivitySubmissions::Id))
                    .col(
                        ColumnDef::new(ActivitySubmissions::ActivityId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivitySubmissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ActivitySubmissions::Score).double().null())
                    .col(ColumnDef::new(ActivitySubmissions::Feedback).text().null())
                    .col(ts_col(ActivitySubmissions::SubmittedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(ActivitySubmissions::Table, ActivitySubmissions::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ActivitySubmissions::Table, ActivitySubmissions::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 考勤记录表
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(id_col(AttendanceRecords::Id))
                    .col(
                        ColumnDef::new(AttendanceRecords::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::Date).string().not_null())
                    .col(ColumnDef::new(AttendanceRecords::Status).string().not_null())
                    .col(ColumnDef::new(AttendanceRecords::Remarks).text().null())
                    .col(ts_col(AttendanceRecords::RecordedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_status")
                    .table(Classes::Table)
                    .col(Classes::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_campus_id")
                    .table(Classes::Table)
                    .col(Classes::CampusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachers_status")
                    .table(Teachers::Table)
                    .col(Teachers::Status)
                    .to_owned(),
            )
            .await?;

        // 关联表唯一约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_class_teachers_class_teacher")
                    .table(ClassTeachers::Table)
                    .col(ClassTeachers::ClassId)
                    .col(ClassTeachers::TeacherId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_class_students_class_student")
                    .table(ClassStudents::Table)
                    .col(ClassStudents::ClassId)
                    .col(ClassStudents::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_class_subjects_class_subject")
                    .table(ClassSubjects::Table)
                    .col(ClassSubjects::ClassId)
                    .col(ClassSubjects::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_activity_submissions_activity_student")
                    .table(ActivitySubmissions::Table)
                    .col(ActivitySubmissions::ActivityId)
                    .col(ActivitySubmissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_attendance_class_student_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::ClassId)
                    .col(AttendanceRecords::StudentId)
                    .col(AttendanceRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_timetables_class_day")
                    .table(Timetables::Table)
                    .col(Timetables::ClassId)
                    .col(Timetables::DayOfWeek)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActivitySubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Timetables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassTeachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Buildings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Campuses {
    Table,
    Id,
    Name,
    Code,
    Address,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Buildings {
    Table,
    Id,
    CampusId,
    Name,
    Code,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
    BuildingId,
    Name,
    Capacity,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassGroups {
    Table,
    Id,
    Name,
    Description,
    CampusId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Classes {
    Table,
    Id,
    Name,
    Capacity,
    Status,
    ClassGroupId,
    CampusId,
    BuildingId,
    RoomId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Email,
    Phone,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeacherProfiles {
    Table,
    Id,
    TeacherId,
    TeacherType,
    Specialization,
    SubjectIds,
    ClassIds,
    CampusIds,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    StudentNumber,
    FirstName,
    LastName,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Subjects {
    Table,
    Id,
    Name,
    Code,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassTeachers {
    Table,
    Id,
    ClassId,
    TeacherId,
    AssignedAt,
}

#[derive(DeriveIden)]
enum ClassStudents {
    Table,
    Id,
    ClassId,
    StudentId,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum ClassSubjects {
    Table,
    Id,
    ClassId,
    SubjectId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Timetables {
    Table,
    Id,
    ClassId,
    SubjectId,
    TeacherId,
    RoomId,
    DayOfWeek,
    StartTime,
    EndTime,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    ClassId,
    SubjectId,
    Title,
    MaxScore,
    DueDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ActivitySubmissions {
    Table,
    Id,
    ActivityId,
    StudentId,
    Score,
    Feedback,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    Table,
    Id,
    ClassId,
    StudentId,
    Date,
    Status,
    Remarks,
    RecordedAt,
}
