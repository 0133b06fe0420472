//! 预导入模块，方便使用

pub use super::activities::{
    ActiveModel as ActivityActiveModel, Entity as Activities, Model as ActivityModel,
};
pub use super::activity_submissions::{
    ActiveModel as ActivitySubmissionActiveModel,
    Entity as ActivitySubmissions,
    Model as ActivitySubmissionModel,
};
pub use super::assessment_periods::{
    ActiveModel as AssessmentPeriodActiveModel,
    Entity as AssessmentPeriods,
    Model as AssessmentPeriodModel,
};
pub use super::assessment_systems::{
    ActiveModel as AssessmentSystemActiveModel,
    Entity as AssessmentSystems,
    Model as AssessmentSystemModel,
};
pub use super::attendance_records::{
    ActiveModel as AttendanceRecordActiveModel,
    Entity as AttendanceRecords,
    Model as AttendanceRecordModel,
};
pub use super::buildings::{
    ActiveModel as BuildingActiveModel, Entity as Buildings, Model as BuildingModel,
};
pub use super::campuses::{
    ActiveModel as CampusActiveModel, Entity as Campuses, Model as CampusModel,
};
pub use super::class_groups::{
    ActiveModel as ClassGroupActiveModel, Entity as ClassGroups, Model as ClassGroupModel,
};
pub use super::class_students::{
    ActiveModel as ClassStudentActiveModel, Entity as ClassStudents, Model as ClassStudentModel,
};
pub use super::class_subjects::{
    ActiveModel as ClassSubjectActiveModel, Entity as ClassSubjects, Model as ClassSubjectModel,
};
pub use super::class_teachers::{
    ActiveModel as ClassTeacherActiveModel, Entity as ClassTeachers, Model as ClassTeacherModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::gradebooks::{
    ActiveModel as GradebookActiveModel, Entity as Gradebooks, Model as GradebookModel,
};
pub use super::role_templates::{
    ActiveModel as RoleTemplateActiveModel, Entity as RoleTemplates, Model as RoleTemplateModel,
};
pub use super::rooms::{ActiveModel as RoomActiveModel, Entity as Rooms, Model as RoomModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subject_records::{
    ActiveModel as SubjectRecordActiveModel, Entity as SubjectRecords, Model as SubjectRecordModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teacher_profiles::{
    ActiveModel as TeacherProfileActiveModel,
    Entity as TeacherProfiles,
    Model as TeacherProfileModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::term_structures::{
    ActiveModel as TermStructureActiveModel, Entity as TermStructures, Model as TermStructureModel,
};
pub use super::terms::{ActiveModel as TermActiveModel, Entity as Terms, Model as TermModel};
pub use super::timetables::{
    ActiveModel as TimetableActiveModel, Entity as Timetables, Model as TimetableModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
