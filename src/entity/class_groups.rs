//! 班级组实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub campus_id: Option<i64>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campuses::Entity",
        from = "Column::CampusId",
        to = "super::campuses::Column::Id"
    )]
    Campus,
}

impl Related<super::campuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_class_group(self) -> crate::models::class_groups::entities::ClassGroup {
        use crate::models::class_groups::entities::ClassGroup;
        use crate::models::common::RecordStatus;
        use chrono::{DateTime, Utc};

        ClassGroup {
            id: self.id,
            name: self.name,
            description: self.description,
            campus_id: self.campus_id,
            status: RecordStatus::from_db(&self.status),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
