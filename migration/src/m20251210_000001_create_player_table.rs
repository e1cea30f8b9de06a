use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Player::Id))
                    .col(string_len(Player::Name, 12))
                    .col(string_len(Player::Title, 30))
                    .col(string_len(Player::Race, 16))
                    .col(string_len(Player::Profession, 16))
                    .col(integer(Player::Experience))
                    .col(integer(Player::Level))
                    .col(integer(Player::UntilNextLevel))
                    .col(timestamp_with_time_zone(Player::Birthday))
                    .col(boolean(Player::Banned).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Title,
    Race,
    Profession,
    Experience,
    Level,
    UntilNextLevel,
    Birthday,
    Banned,
}
