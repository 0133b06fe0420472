//! 登录账户实体，教师档案通过 `teachers.user_id` 关联

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::models::users::entities::{User, UserRole, UserStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub display_name: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teachers::Entity")]
    Teachers,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teachers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn utc(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

impl Model {
    /// 未知角色按权限最小的学生处理，未知状态视为停用
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            role: self.role.parse().unwrap_or(UserRole::Student),
            status: self.status.parse().unwrap_or(UserStatus::Inactive),
            last_login: self.last_login.map(utc),
            created_at: utc(self.created_at),
            updated_at: utc(self.updated_at),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            display_name: self.display_name,
        }
    }
}
