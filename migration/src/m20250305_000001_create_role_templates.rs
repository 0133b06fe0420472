use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 角色模板表 ====================
        // permissions / settings 以 JSON 文本存储
        manager
            .create_table(
                Table::create()
                    .table(RoleTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoleTemplates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RoleTemplates::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(RoleTemplates::DisplayName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoleTemplates::Description).text().null())
                    .col(
                        ColumnDef::new(RoleTemplates::Permissions)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoleTemplates::Settings).text().not_null())
                    .col(
                        ColumnDef::new(RoleTemplates::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoleTemplates::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleTemplates::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum RoleTemplates {
    Table,
    Id,
    Name,
    DisplayName,
    Description,
    Permissions,
    Settings,
    CreatedAt,
    UpdatedAt,
}
