//! 领域服务
//!
//! 每个服务持有存储句柄，由 [`RequestContext`] 按请求构造。
//! 服务方法负责校验、组合多步存储操作，并返回带类别的错误。

pub mod activities;
pub mod analytics;
pub mod attendance;
pub mod auth;
pub mod campuses;
pub mod class_groups;
pub mod classes;
pub mod gradebooks;
pub mod pages;
pub mod role_templates;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod timetables;

pub use activities::ActivityService;
pub use analytics::AnalyticsService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use campuses::CampusService;
pub use class_groups::ClassGroupService;
pub use classes::ClassService;
pub use gradebooks::GradebookService;
pub use pages::PageService;
pub use role_templates::RoleTemplateService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
pub use timetables::TimetableService;

use crate::errors::{DashboardError, Result};
use crate::middlewares::RequestContext;

/// 将存储层返回的 `Option` 转换为业务错误
pub(crate) trait FoundExt<T> {
    /// 目标记录缺失时返回 NotFound
    fn or_not_found(self, entity: &str, id: i64) -> Result<T>;
    /// 被引用的记录缺失时返回 Validation
    fn or_invalid_reference(self, entity: &str, id: i64) -> Result<T>;
}

impl<T> FoundExt<T> for Option<T> {
    fn or_not_found(self, entity: &str, id: i64) -> Result<T> {
        self.ok_or_else(|| DashboardError::not_found(format!("{entity} {id} not found")))
    }

    fn or_invalid_reference(self, entity: &str, id: i64) -> Result<T> {
        self.ok_or_else(|| DashboardError::validation(format!("{entity} {id} does not exist")))
    }
}

impl RequestContext {
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.storage.clone())
    }

    pub fn campuses(&self) -> CampusService {
        CampusService::new(self.storage.clone())
    }

    pub fn class_groups(&self) -> ClassGroupService {
        ClassGroupService::new(self.storage.clone())
    }

    pub fn classes(&self) -> ClassService {
        ClassService::new(self.storage.clone())
    }

    pub fn teachers(&self) -> TeacherService {
        TeacherService::new(self.storage.clone())
    }

    pub fn students(&self) -> StudentService {
        StudentService::new(self.storage.clone())
    }

    pub fn subjects(&self) -> SubjectService {
        SubjectService::new(self.storage.clone())
    }

    pub fn timetables(&self) -> TimetableService {
        TimetableService::new(self.storage.clone())
    }

    pub fn activities(&self) -> ActivityService {
        ActivityService::new(self.storage.clone())
    }

    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(self.storage.clone())
    }

    pub fn analytics(&self) -> AnalyticsService {
        AnalyticsService::new(self.storage.clone())
    }

    pub fn role_templates(&self) -> RoleTemplateService {
        RoleTemplateService::new(self.storage.clone())
    }

    pub fn pages(&self) -> PageService {
        PageService::new(self.storage.clone(), self.gradebooks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_found_ext_kinds() {
        assert_eq!(Some(3).or_not_found("Class", 1).unwrap(), 3);

        let err = None::<i64>.or_not_found("Class", 42).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Class 42 not found");

        let err = None::<i64>.or_invalid_reference("Campus", 9).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Campus 9 does not exist");
    }
}
