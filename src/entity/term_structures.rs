use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "term_structures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub gradebook_id: i64,
    pub academic_year: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gradebooks::Entity",
        from = "Column::GradebookId",
        to = "super::gradebooks::Column::Id"
    )]
    Gradebook,
}

impl Related<super::gradebooks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gradebook.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_term_structure(self) -> crate::models::gradebooks::entities::TermStructure {
        crate::models::gradebooks::entities::TermStructure {
            id: self.id,
            gradebook_id: self.gradebook_id,
            academic_year: self.academic_year,
        }
    }
}
