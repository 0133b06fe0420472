//! 成绩册中的科目成绩记录

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subject_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub gradebook_id: i64,
    pub subject_id: i64,
    pub score: Option<f64>,
    pub grade: Option<String>,
    pub remarks: Option<String>,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gradebooks::Entity",
        from = "Column::GradebookId",
        to = "super::gradebooks::Column::Id"
    )]
    Gradebook,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
}

impl Related<super::gradebooks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gradebook.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject_record(self) -> crate::models::gradebooks::entities::SubjectRecord {
        use crate::models::gradebooks::entities::SubjectRecord;
        use chrono::{DateTime, Utc};

        SubjectRecord {
            id: self.id,
            gradebook_id: self.gradebook_id,
            subject_id: self.subject_id,
            score: self.score,
            grade: self.grade,
            remarks: self.remarks,
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
