use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260315_000001_create_user_table::User,
    m20260317_000010_create_volunteer_log_table::VolunteerLog,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PeerVerification::Table)
                    .if_not_exists()
                    .col(pk_auto(PeerVerification::Id))
                    .col(integer(PeerVerification::LogId))
                    .col(integer(PeerVerification::UserId))
                    .col(string(PeerVerification::Status))
                    .col(
                        timestamp(PeerVerification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_peer_verification_log_id")
                            .from(PeerVerification::Table, PeerVerification::LogId)
                            .to(VolunteerLog::Table, VolunteerLog::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_peer_verification_user_id")
                            .from(PeerVerification::Table, PeerVerification::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One verdict per peer per log, enforced at the store level so racing
        // submissions cannot slip in a duplicate.
        manager
            .create_index(
                Index::create()
                    .name("idx_peer_verification_log_user")
                    .table(PeerVerification::Table)
                    .col(PeerVerification::LogId)
                    .col(PeerVerification::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PeerVerification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PeerVerification {
    Table,
    Id,
    LogId,
    UserId,
    Status,
    CreatedAt,
}
