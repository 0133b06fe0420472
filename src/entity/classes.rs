//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub status: String,
    pub class_group_id: i64,
    pub campus_id: i64,
    pub building_id: Option<i64>,
    pub room_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_groups::Entity",
        from = "Column::ClassGroupId",
        to = "super::class_groups::Column::Id"
    )]
    ClassGroup,
    #[sea_orm(
        belongs_to = "super::campuses::Entity",
        from = "Column::CampusId",
        to = "super::campuses::Column::Id"
    )]
    Campus,
    #[sea_orm(
        belongs_to = "super::buildings::Entity",
        from = "Column::BuildingId",
        to = "super::buildings::Column::Id"
    )]
    Building,
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
}

impl Related<super::class_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassGroup.def()
    }
}

impl Related<super::campuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campus.def()
    }
}

impl Related<super::buildings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Building.def()
    }
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::Class;
        use crate::models::common::RecordStatus;
        use chrono::{DateTime, Utc};

        Class {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            status: RecordStatus::from_db(&self.status),
            class_group_id: self.class_group_id,
            campus_id: self.campus_id,
            building_id: self.building_id,
            room_id: self.room_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
