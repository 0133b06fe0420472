use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "terms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub term_structure_id: i64,
    pub name: String,
    pub sequence: i32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::term_structures::Entity",
        from = "Column::TermStructureId",
        to = "super::term_structures::Column::Id"
    )]
    TermStructure,
}

impl Related<super::term_structures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TermStructure.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_term(self) -> crate::models::gradebooks::entities::Term {
        use crate::utils::dates::parse_date;

        crate::models::gradebooks::entities::Term {
            id: self.id,
            term_structure_id: self.term_structure_id,
            name: self.name,
            sequence: self.sequence,
            start_date: self.start_date.as_deref().and_then(parse_date),
            end_date: self.end_date.as_deref().and_then(parse_date),
        }
    }
}
