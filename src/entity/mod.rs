//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod activities;
pub mod activity_submissions;
pub mod assessment_periods;
pub mod assessment_systems;
pub mod attendance_records;
pub mod buildings;
pub mod campuses;
pub mod class_groups;
pub mod class_students;
pub mod class_subjects;
pub mod class_teachers;
pub mod classes;
pub mod gradebooks;
pub mod role_templates;
pub mod rooms;
pub mod students;
pub mod subject_records;
pub mod subjects;
pub mod teacher_profiles;
pub mod teachers;
pub mod term_structures;
pub mod terms;
pub mod timetables;
pub mod users;
