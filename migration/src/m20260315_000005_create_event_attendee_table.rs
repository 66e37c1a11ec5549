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
                    .table(EventAttendee::Table)
                    .if_not_exists()
                    .col(integer(EventAttendee::EventId))
                    .col(integer(EventAttendee::UserId))
                    .col(
                        timestamp(EventAttendee::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EventAttendee::EventId)
                            .col(EventAttendee::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendee_event_id")
                            .from(EventAttendee::Table, EventAttendee::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendee_user_id")
                            .from(EventAttendee::Table, EventAttendee::UserId)
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
            .drop_table(Table::drop().table(EventAttendee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventAttendee {
    Table,
    EventId,
    UserId,
    CreatedAt,
}
