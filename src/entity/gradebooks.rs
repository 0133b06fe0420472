//! 成绩册实体，每个班级至多一个（class_id 唯一）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gradebooks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub class_id: i64,
    pub assessment_system_id: i64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::assessment_systems::Entity",
        from = "Column::AssessmentSystemId",
        to = "super::assessment_systems::Column::Id"
    )]
    AssessmentSystem,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::assessment_systems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssessmentSystem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_record(self) -> crate::models::gradebooks::entities::GradebookRecord {
        use crate::models::common::RecordStatus;
        use crate::models::gradebooks::entities::GradebookRecord;
        use chrono::{DateTime, Utc};

        GradebookRecord {
            id: self.id,
            class_id: self.class_id,
            assessment_system_id: self.assessment_system_id,
            status: RecordStatus::from_db(&self.status),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
