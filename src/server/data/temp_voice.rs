use crate::server::model::temp_voice::{
    TempVoiceSettings, UpsertTempVoiceSettingsParams, DEFAULT_DELETE_AFTER_SECONDS,
    DEFAULT_NAME_TEMPLATE, MAX_USER_LIMIT,
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository for temporary voice settings database operations.
///
/// Stores one settings row per guild, converting between entity models and domain
/// models at the infrastructure boundary.
pub struct TempVoiceSettingsRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> TempVoiceSettingsRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the settings row for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Some(TempVoiceSettings))` - Settings exist for the guild
    /// - `Ok(None)` - Guild has never been configured
    /// - `Err(DbErr)` - Database error during query or entity conversion failure
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Option<TempVoiceSettings>, DbErr> {
        let entity = entity::prelude::TempVoiceSettings::find()
            .filter(entity::temp_voice_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(TempVoiceSettings::from_entity).transpose()
    }

    /// Creates or replaces the settings for a guild.
    ///
    /// Unset template and grace period fall back to their defaults. Every column except
    /// the guild ID is overwritten when a row already exists.
    ///
    /// A user limit above Discord's maximum or a bitrate that does not fit the column is
    /// rejected before anything is written.
    ///
    /// # Arguments
    /// - `params` - Settings to store
    ///
    /// # Returns
    /// - `Ok(TempVoiceSettings)` - Stored settings
    /// - `Err(DbErr::Custom)` - User limit or bitrate out of range
    /// - `Err(DbErr)` - Database error during insert/update or entity conversion failure
    pub async fn upsert(
        &self,
        params: UpsertTempVoiceSettingsParams,
    ) -> Result<TempVoiceSettings, DbErr> {
        use entity::temp_voice_settings::Column;

        if let Some(user_limit) = params.user_limit.filter(|v| *v > MAX_USER_LIMIT) {
            return Err(DbErr::Custom(format!(
                "user_limit {} exceeds the maximum of {}",
                user_limit, MAX_USER_LIMIT
            )));
        }
        let user_limit = params
            .user_limit
            .map(|v| to_integer_column("user_limit", v))
            .transpose()?;
        let bitrate = params
            .bitrate
            .map(|v| to_integer_column("bitrate", v))
            .transpose()?;

        let entity = entity::prelude::TempVoiceSettings::insert(
            entity::temp_voice_settings::ActiveModel {
                guild_id: ActiveValue::Set(params.guild_id.to_string()),
                enabled: ActiveValue::Set(params.enabled),
                creator_channel_id: ActiveValue::Set(
                    params.creator_channel_id.map(|id| id.to_string()),
                ),
                category_id: ActiveValue::Set(params.category_id.map(|id| id.to_string())),
                name_template: ActiveValue::Set(
                    params
                        .name_template
                        .unwrap_or_else(|| DEFAULT_NAME_TEMPLATE.to_string()),
                ),
                user_limit: ActiveValue::Set(user_limit),
                bitrate: ActiveValue::Set(bitrate),
                delete_after_seconds: ActiveValue::Set(
                    params
                        .delete_after_seconds
                        .unwrap_or(DEFAULT_DELETE_AFTER_SECONDS),
                ),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(Column::GuildId)
                .update_columns([
                    Column::Enabled,
                    Column::CreatorChannelId,
                    Column::CategoryId,
                    Column::NameTemplate,
                    Column::UserLimit,
                    Column::Bitrate,
                    Column::DeleteAfterSeconds,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        TempVoiceSettings::from_entity(entity)
    }

    /// Deletes the settings for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(())` - Settings deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64) -> Result<(), DbErr> {
        entity::prelude::TempVoiceSettings::delete_many()
            .filter(entity::temp_voice_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }
}

/// Converts an unsigned setting into its signed integer column value.
fn to_integer_column(name: &str, value: u32) -> Result<i32, DbErr> {
    i32::try_from(value).map_err(|e| DbErr::Custom(format!("Failed to store {}: {}", name, e)))
}
