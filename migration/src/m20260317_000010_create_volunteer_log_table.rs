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
                    .table(VolunteerLog::Table)
                    .if_not_exists()
                    .col(pk_auto(VolunteerLog::Id))
                    .col(integer(VolunteerLog::UserId))
                    .col(integer(VolunteerLog::EventId))
                    .col(double(VolunteerLog::Hours))
                    .col(boolean(VolunteerLog::Verified).default(false))
                    .col(
                        timestamp(VolunteerLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(VolunteerLog::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volunteer_log_user_id")
                            .from(VolunteerLog::Table, VolunteerLog::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volunteer_log_event_id")
                            .from(VolunteerLog::Table, VolunteerLog::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VolunteerLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VolunteerLog {
    Table,
    Id,
    UserId,
    EventId,
    Hours,
    Verified,
    CreatedAt,
    UpdatedAt,
}
