use sea_orm::DatabaseConnection;

use crate::server::{
    data::TempVoiceSettingsRepository,
    error::AppError,
    model::temp_voice::TempVoiceSettings,
};

/// Service for reading per-guild temporary voice settings.
pub struct TempVoiceSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TempVoiceSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings of a guild if temporary channels are usable there.
    ///
    /// Guilds without settings, with the feature disabled or without a creator channel
    /// yield `None`; those are configuration gaps rather than errors.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(TempVoiceSettings))`: Feature enabled with a creator channel
    /// - `Ok(None)`: Feature not usable in this guild
    /// - `Err(AppError)`: Database error while loading settings
    pub async fn get_active(&self, guild_id: u64) -> Result<Option<TempVoiceSettings>, AppError> {
        let settings = TempVoiceSettingsRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        Ok(settings.filter(|settings| settings.active_creator_channel().is_some()))
    }
}
