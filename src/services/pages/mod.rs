//! 页面渲染
//!
//! 每个页面并发获取所需数据，校验必需实体存在后整理为视图模型。
//! 任一获取失败时页面降级为 not_found 或 error 状态，不向上返回错误。

pub mod class_detail;
pub mod class_edit;
pub mod gradebook;
pub mod teacher_edit;

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::Result;
use crate::models::auth::Caller;
use crate::models::common::OptionItem;
use crate::models::pages::{ClassDetailPage, ClassEditPage, GradebookPage, PageState, TeacherEditPage};
use crate::models::users::entities::UserRole;
use crate::services::GradebookService;
use crate::storage::Storage;

pub struct PageService {
    storage: Arc<dyn Storage>,
    gradebooks: Arc<GradebookService>,
}

/// 路径中的角色必须是已知角色；非管理员只能访问自己角色下的页面
pub fn resolve_role(caller: &Caller, raw: &str) -> Option<UserRole> {
    raw.parse::<UserRole>()
        .ok()
        .filter(|role| caller.is_admin() || caller.role == *role)
}

fn render<T>(page: &str, result: Result<T>) -> PageState<T> {
    if let Err(e) = &result {
        if e.kind().is_internal() {
            error!("Page {} failed to render: {}", page, e);
        } else {
            info!("Page {} rendered without data: {}", page, e);
        }
    }
    PageState::from_result(result)
}

pub(crate) fn option(value: i64, label: impl Into<String>) -> OptionItem {
    OptionItem {
        value,
        label: label.into(),
    }
}

const UNKNOWN_PAGE: &str = "Page not found";

impl PageService {
    pub fn new(storage: Arc<dyn Storage>, gradebooks: Arc<GradebookService>) -> Self {
        Self {
            storage,
            gradebooks,
        }
    }

    pub async fn teacher_edit(
        &self,
        caller: &Caller,
        role: &str,
        teacher_id: i64,
    ) -> PageState<TeacherEditPage> {
        let Some(role) = resolve_role(caller, role) else {
            return PageState::not_found(UNKNOWN_PAGE);
        };
        render(
            "teacher_edit",
            teacher_edit::load(self, role, teacher_id).await,
        )
    }

    pub async fn class_detail(
        &self,
        caller: &Caller,
        role: &str,
        class_id: i64,
    ) -> PageState<ClassDetailPage> {
        let Some(role) = resolve_role(caller, role) else {
            return PageState::not_found(UNKNOWN_PAGE);
        };
        render(
            "class_detail",
            class_detail::load(self, role, class_id).await,
        )
    }

    pub async fn class_edit(
        &self,
        caller: &Caller,
        role: &str,
        class_id: i64,
    ) -> PageState<ClassEditPage> {
        let Some(role) = resolve_role(caller, role) else {
            return PageState::not_found(UNKNOWN_PAGE);
        };
        render("class_edit", class_edit::load(self, role, class_id).await)
    }

    pub async fn gradebook(
        &self,
        caller: &Caller,
        role: &str,
        class_id: i64,
    ) -> PageState<GradebookPage> {
        let Some(role) = resolve_role(caller, role) else {
            return PageState::not_found(UNKNOWN_PAGE);
        };
        render("gradebook", gradebook::load(self, role, class_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(role: UserRole) -> Caller {
        Caller {
            user_id: 1,
            username: "someone".to_string(),
            role,
        }
    }

    #[test]
    fn test_resolve_role() {
        let teacher = caller(UserRole::Teacher);
        assert_eq!(resolve_role(&teacher, "teacher"), Some(UserRole::Teacher));
        assert_eq!(resolve_role(&teacher, "admin"), None);
        assert_eq!(resolve_role(&teacher, "principal"), None);

        let admin = caller(UserRole::Admin);
        assert_eq!(resolve_role(&admin, "student"), Some(UserRole::Student));
    }
}
