use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "buildings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campus_id: i64,
    pub name: String,
    pub code: Option<String>,
    pub created_at: i64,
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
    pub fn into_building(self) -> crate::models::campuses::entities::Building {
        use crate::models::campuses::entities::Building;
        use chrono::{DateTime, Utc};

        Building {
            id: self.id,
            campus_id: self.campus_id,
            name: self.name,
            code: self.code,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
