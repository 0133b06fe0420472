//! 登录账户存储操作
//!
//! 邮箱统一以小写入库，登录时用户名区分大小写而邮箱不区分。

use super::{SeaOrmStorage, db_error};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::Result;
use crate::models::users::{
    entities::{User, UserStatus},
    requests::CreateUserRequest,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

impl SeaOrmStorage {
    pub async fn create_user_impl(
        &self,
        req: CreateUserRequest,
        password_hash: String,
    ) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        ActiveModel {
            username: Set(req.username.trim().to_string()),
            email: Set(req.email.trim().to_lowercase()),
            password_hash: Set(password_hash),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map(|m| m.into_user())
        .map_err(db_error("create user"))
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        Users::find_by_id(id)
            .one(&self.db)
            .await
            .map(|m| m.map(|m| m.into_user()))
            .map_err(db_error("query user"))
    }

    /// 按用户名或邮箱查找登录账户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let identifier = identifier.trim();
        Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier.to_lowercase())),
            )
            .one(&self.db)
            .await
            .map(|m| m.map(|m| m.into_user()))
            .map_err(db_error("query user"))
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(db_error("count users"))
    }

    pub async fn update_last_login_impl(&self, id: i64) -> Result<()> {
        Users::update_many()
            .col_expr(
                Column::LastLogin,
                Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map(|_| ())
            .map_err(db_error("update last login"))
    }
}
