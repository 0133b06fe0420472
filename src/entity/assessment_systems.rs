//! 评估体系实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment_systems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub kind: String,
    pub min_score: f64,
    pub max_score: f64,
    pub passing_score: f64,
    pub is_default: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assessment_system(self) -> crate::models::gradebooks::entities::AssessmentSystem {
        use crate::models::gradebooks::entities::AssessmentSystem;
        use chrono::{DateTime, Utc};

        AssessmentSystem {
            id: self.id,
            name: self.name,
            kind: self.kind.parse().unwrap_or_default(),
            min_score: self.min_score,
            max_score: self.max_score,
            passing_score: self.passing_score,
            is_default: self.is_default,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
