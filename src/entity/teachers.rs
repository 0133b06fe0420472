//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 转换为业务模型，profile 由调用方单独查询后传入
    pub fn into_teacher(
        self,
        profile: Option<crate::models::teachers::entities::TeacherProfile>,
    ) -> crate::models::teachers::entities::Teacher {
        use crate::models::common::RecordStatus;
        use crate::models::teachers::entities::Teacher;
        use chrono::{DateTime, Utc};

        Teacher {
            id: self.id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            status: RecordStatus::from_db(&self.status),
            profile,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }

    pub fn into_summary(self) -> crate::models::teachers::entities::TeacherSummary {
        crate::models::teachers::entities::TeacherSummary {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
