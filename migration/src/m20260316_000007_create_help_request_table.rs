use sea_orm_migration::{prelude::*, schema::*};

use super::m20260315_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HelpRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(HelpRequest::Id))
                    .col(string(HelpRequest::Title))
                    .col(text(HelpRequest::Description))
                    .col(string(HelpRequest::UrgencyLevel))
                    .col(string(HelpRequest::Status).default("open"))
                    .col(integer(HelpRequest::CreatedBy))
                    .col(
                        timestamp(HelpRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(HelpRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_help_request_created_by")
                            .from(HelpRequest::Table, HelpRequest::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HelpRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HelpRequest {
    Table,
    Id,
    Title,
    Description,
    UrgencyLevel,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
