use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment_periods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub term_id: i64,
    pub name: String,
    pub sequence: i32,
    pub weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::terms::Entity",
        from = "Column::TermId",
        to = "super::terms::Column::Id"
    )]
    Term,
}

impl Related<super::terms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Term.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_period(self) -> crate::models::gradebooks::entities::AssessmentPeriod {
        crate::models::gradebooks::entities::AssessmentPeriod {
            id: self.id,
            term_id: self.term_id,
            name: self.name,
            sequence: self.sequence,
            weight: self.weight,
        }
    }
}
