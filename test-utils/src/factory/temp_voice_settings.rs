//! Temporary voice settings factory for creating test settings rows.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test settings rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let settings = TempVoiceSettingsFactory::new(&db)
///     .guild_id("987654321")
///     .delete_after_seconds(0)
///     .build()
///     .await?;
/// ```
pub struct TempVoiceSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    enabled: bool,
    creator_channel_id: Option<String>,
    name_template: String,
    delete_after_seconds: i64,
}

impl<'a> TempVoiceSettingsFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - enabled: `true`
    /// - creator_channel_id: auto-incremented
    /// - name_template: fixture default
    /// - delete_after_seconds: `30`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            enabled: true,
            creator_channel_id: Some(next_id().to_string()),
            name_template: fixture::temp_voice_settings::DEFAULT_NAME_TEMPLATE.to_string(),
            delete_after_seconds: fixture::temp_voice_settings::DEFAULT_DELETE_AFTER_SECONDS,
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets whether the feature is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the creator channel ID.
    pub fn creator_channel_id(mut self, channel_id: Option<&str>) -> Self {
        self.creator_channel_id = channel_id.map(str::to_string);
        self
    }

    /// Sets the channel name template.
    pub fn name_template(mut self, template: impl Into<String>) -> Self {
        self.name_template = template.into();
        self
    }

    /// Sets the grace period in seconds.
    pub fn delete_after_seconds(mut self, seconds: i64) -> Self {
        self.delete_after_seconds = seconds;
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::temp_voice_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::temp_voice_settings::Model, DbErr> {
        entity::temp_voice_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            enabled: ActiveValue::Set(self.enabled),
            creator_channel_id: ActiveValue::Set(self.creator_channel_id),
            category_id: ActiveValue::Set(None),
            name_template: ActiveValue::Set(self.name_template),
            user_limit: ActiveValue::Set(None),
            bitrate: ActiveValue::Set(None),
            delete_after_seconds: ActiveValue::Set(self.delete_after_seconds),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enabled settings row with default values.
///
/// Shorthand for `TempVoiceSettingsFactory::new(db).build().await`.
pub async fn create_settings(
    db: &DatabaseConnection,
) -> Result<entity::temp_voice_settings::Model, DbErr> {
    TempVoiceSettingsFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_settings_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_temp_voice_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = create_settings(db).await?;

        assert!(settings.enabled);
        assert!(settings.creator_channel_id.is_some());
        assert_eq!(settings.delete_after_seconds, 30);

        Ok(())
    }

    #[tokio::test]
    async fn creates_settings_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_temp_voice_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let settings = TempVoiceSettingsFactory::new(db)
            .guild_id("987654321")
            .enabled(false)
            .creator_channel_id(None)
            .delete_after_seconds(0)
            .build()
            .await?;

        assert_eq!(settings.guild_id, "987654321");
        assert!(!settings.enabled);
        assert!(settings.creator_channel_id.is_none());
        assert_eq!(settings.delete_after_seconds, 0);

        Ok(())
    }
}
