use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260315_000001_create_user_table::User, m20260315_000002_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(string(Event::Category))
                    .col(string(Event::Location))
                    .col(timestamp(Event::Date))
                    .col(timestamp_null(Event::RegistrationDeadline))
                    .col(integer(Event::CreatedBy))
                    .col(integer_null(Event::TeamOrganizer))
                    .col(integer_null(Event::MaxAttendees))
                    .col(string(Event::Status).default("upcoming"))
                    .col(string(Event::Visibility).default("public"))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_created_by")
                            .from(Event::Table, Event::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_organizer")
                            .from(Event::Table, Event::TeamOrganizer)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    Category,
    Location,
    Date,
    RegistrationDeadline,
    CreatedBy,
    TeamOrganizer,
    MaxAttendees,
    Status,
    Visibility,
    CreatedAt,
    UpdatedAt,
}
