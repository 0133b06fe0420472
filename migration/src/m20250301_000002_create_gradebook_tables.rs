use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_tables::{Classes, Subjects};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 评估体系表 ====================
        manager
            .create_table(
                Table::create()
                    .table(AssessmentSystems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssessmentSystems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssessmentSystems::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AssessmentSystems::Kind).string().not_null())
                    .col(
                        ColumnDef::new(AssessmentSystems::MinScore)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssessmentSystems::MaxScore)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssessmentSystems::PassingScore)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssessmentSystems::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AssessmentSystems::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 成绩册表（与班级一对一） ====================
        manager
            .create_table(
                Table::create()
                    .table(Gradebooks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gradebooks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Gradebooks::ClassId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Gradebooks::AssessmentSystemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Gradebooks::Status).string().not_null())
                    .col(
                        ColumnDef::new(Gradebooks::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Gradebooks::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Gradebooks::Table, Gradebooks::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Gradebooks::Table, Gradebooks::AssessmentSystemId)
                            .to(AssessmentSystems::Table, AssessmentSystems::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 学期结构表 ====================
        manager
            .create_table(
                Table::create()
                    .table(TermStructures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TermStructures::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TermStructures::GradebookId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TermStructures::AcademicYear)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TermStructures::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TermStructures::Table, TermStructures::GradebookId)
                            .to(Gradebooks::Table, Gradebooks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 学期表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Terms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Terms::TermStructureId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Terms::Name).string().not_null())
                    .col(ColumnDef::new(Terms::Sequence).integer().not_null())
                    .col(ColumnDef::new(Terms::StartDate).string().null())
                    .col(ColumnDef::new(Terms::EndDate).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Terms::Table, Terms::TermStructureId)
                            .to(TermStructures::Table, TermStructures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 评估周期表 ====================
        manager
            .create_table(
                Table::create()
                    .table(AssessmentPeriods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssessmentPeriods::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssessmentPeriods::TermId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssessmentPeriods::Name).string().not_null())
                    .col(
                        ColumnDef::new(AssessmentPeriods::Sequence)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssessmentPeriods::Weight).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssessmentPeriods::Table, AssessmentPeriods::TermId)
                            .to(Terms::Table, Terms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 科目成绩记录表 ====================
        manager
            .create_table(
                Table::create()
                    .table(SubjectRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubjectRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubjectRecords::GradebookId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectRecords::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubjectRecords::Score).double().null())
                    .col(ColumnDef::new(SubjectRecords::Grade).string().null())
                    .col(ColumnDef::new(SubjectRecords::Remarks).text().null())
                    .col(
                        ColumnDef::new(SubjectRecords::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubjectRecords::Table, SubjectRecords::GradebookId)
                            .to(Gradebooks::Table, Gradebooks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubjectRecords::Table, SubjectRecords::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_subject_records_gradebook_subject")
                    .table(SubjectRecords::Table)
                    .col(SubjectRecords::GradebookId)
                    .col(SubjectRecords::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_terms_term_structure_id")
                    .table(Terms::Table)
                    .col(Terms::TermStructureId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubjectRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssessmentPeriods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Terms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TermStructures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Gradebooks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssessmentSystems::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AssessmentSystems {
    Table,
    Id,
    Name,
    Kind,
    MinScore,
    MaxScore,
    PassingScore,
    IsDefault,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Gradebooks {
    Table,
    Id,
    ClassId,
    AssessmentSystemId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TermStructures {
    Table,
    Id,
    GradebookId,
    AcademicYear,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Terms {
    Table,
    Id,
    TermStructureId,
    Name,
    Sequence,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum AssessmentPeriods {
    Table,
    Id,
    TermId,
    Name,
    Sequence,
    Weight,
}

#[derive(DeriveIden)]
enum SubjectRecords {
    Table,
    Id,
    GradebookId,
    SubjectId,
    Score,
    Grade,
    Remarks,
    UpdatedAt,
}
