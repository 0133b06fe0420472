use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activity_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub activity_id: i64,
    pub student_id: i64,
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub submitted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activities::Entity",
        from = "Column::ActivityId",
        to = "super::activities::Column::Id"
    )]
    Activity,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_submission(self) -> crate::models::activities::entities::ActivitySubmission {
        use crate::models::activities::entities::ActivitySubmission;
        use chrono::{DateTime, Utc};

        ActivitySubmission {
            id: self.id,
            activity_id: self.activity_id,
            student_id: self.student_id,
            score: self.score,
            feedback: self.feedback,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
        }
    }
}
