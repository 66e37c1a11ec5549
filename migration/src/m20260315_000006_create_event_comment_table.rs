use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260315_000001_create_user_table::User, m20260315_000004_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventComment::Table)
                    .if_not_exists()
                    .col(pk_auto(EventComment::Id))
                    .col(integer(EventComment::EventId))
                    .col(integer(EventComment::UserId))
                    .col(text(EventComment::Text))
                    .col(
                        timestamp(EventComment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_comment_event_id")
                            .from(EventComment::Table, EventComment::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_comment_user_id")
                            .from(EventComment::Table, EventComment::UserId)
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
            .drop_table(Table::drop().table(EventComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventComment {
    Table,
    Id,
    EventId,
    UserId,
    Text,
    CreatedAt,
}
