use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name))
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::Password))
                    .col(boolean(Users::IsActive).default(true))
                    .col(integer(Users::WalletBalance).default(0))
                    .col(string_null(Users::ProfilePicture))
                    .col(timestamp_with_time_zone_null(Users::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Lookup indexes on the columns the handlers filter and sort by
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_name")
                    .table(Users::Table)
                    .col(Users::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        // Create games table
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(pk_auto(Games::Id))
                    .col(string(Games::Title))
                    .col(string(Games::Description))
                    .col(string(Games::Developer))
                    .col(string(Games::Publisher))
                    .col(string(Games::Genre))
                    .col(integer(Games::Price))
                    .col(string(Games::ReleaseDate))
                    .col(integer(Games::Rating).default(0))
                    .col(string_null(Games::CoverImage))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    Password,
    IsActive,
    WalletBalance,
    ProfilePicture,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Title,
    Description,
    Developer,
    Publisher,
    Genre,
    Price,
    ReleaseDate,
    Rating,
    CoverImage,
}
