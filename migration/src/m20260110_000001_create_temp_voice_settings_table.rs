use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TempVoiceSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(TempVoiceSettings::Id))
                    .col(string_uniq(TempVoiceSettings::GuildId))
                    .col(boolean(TempVoiceSettings::Enabled).default(false))
                    .col(string_null(TempVoiceSettings::CreatorChannelId))
                    .col(string_null(TempVoiceSettings::CategoryId))
                    .col(string(TempVoiceSettings::NameTemplate).default("Temp Channel #{count}"))
                    .col(integer_null(TempVoiceSettings::UserLimit))
                    .col(integer_null(TempVoiceSettings::Bitrate))
                    .col(big_integer(TempVoiceSettings::DeleteAfterSeconds).default(30))
                    .col(
                        timestamp(TempVoiceSettings::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TempVoiceSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TempVoiceSettings {
    Table,
    Id,
    GuildId,
    Enabled,
    CreatorChannelId,
    CategoryId,
    NameTemplate,
    UserLimit,
    Bitrate,
    DeleteAfterSeconds,
    UpdatedAt,
}
