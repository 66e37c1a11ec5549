use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Username))
                    .col(string_uniq(User::Email))
                    .col(string(User::FullName))
                    .col(string(User::PasswordHash))
                    .col(string_null(User::Avatar))
                    .col(string_null(User::CoverImage))
                    .col(text_null(User::Bio))
                    .col(text(User::Skills).default("[]"))
                    .col(text(User::CausesSupported).default("[]"))
                    .col(double(User::TotalHours).default(0))
                    .col(integer(User::Points).default(0))
                    .col(string(User::Role).default("user"))
                    .col(string_null(User::RefreshToken))
                    .col(string_null(User::ResetToken))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    FullName,
    PasswordHash,
    Avatar,
    CoverImage,
    Bio,
    Skills,
    CausesSupported,
    TotalHours,
    Points,
    Role,
    RefreshToken,
    ResetToken,
    CreatedAt,
    UpdatedAt,
}
