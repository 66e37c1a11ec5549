use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260315_000001_create_user_table::User,
    m20260316_000007_create_help_request_table::HelpRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HelpRequestComment::Table)
                    .if_not_exists()
                    .col(pk_auto(HelpRequestComment::Id))
                    .col(integer(HelpRequestComment::HelpRequestId))
                    .col(integer(HelpRequestComment::UserId))
                    .col(text(HelpRequestComment::Text))
                    .col(
                        timestamp(HelpRequestComment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_help_request_comment_help_request_id")
                            .from(
                                HelpRequestComment::Table,
                                HelpRequestComment::HelpRequestId,
                            )
                            .to(HelpRequest::Table, HelpRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_help_request_comment_user_id")
                            .from(HelpRequestComment::Table, HelpRequestComment::UserId)
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
            .drop_table(Table::drop().table(HelpRequestComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HelpRequestComment {
    Table,
    Id,
    HelpRequestId,
    UserId,
    Text,
    CreatedAt,
}
