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
                    .table(HelpRequestHelper::Table)
                    .if_not_exists()
                    .col(integer(HelpRequestHelper::HelpRequestId))
                    .col(integer(HelpRequestHelper::UserId))
                    .col(
                        timestamp(HelpRequestHelper::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(HelpRequestHelper::HelpRequestId)
                            .col(HelpRequestHelper::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_help_request_helper_help_request_id")
                            .from(HelpRequestHelper::Table, HelpRequestHelper::HelpRequestId)
                            .to(HelpRequest::Table, HelpRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_help_request_helper_user_id")
                            .from(HelpRequestHelper::Table, HelpRequestHelper::UserId)
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
            .drop_table(Table::drop().table(HelpRequestHelper::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HelpRequestHelper {
    Table,
    HelpRequestId,
    UserId,
    CreatedAt,
}
