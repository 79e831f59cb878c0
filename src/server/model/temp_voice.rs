//! Temporary voice channel settings domain models.
//!
//! Provides the per-guild configuration consumed by the temporary voice manager: whether
//! the feature is enabled, which channel acts as the creator channel, and how created
//! channels are named, sized and reclaimed. Handles conversion between entity models
//! from the database and domain models used in the service layer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serenity::all::ChannelId;

/// Name template applied when a guild has not configured one.
pub const DEFAULT_NAME_TEMPLATE: &str = "Temp Channel #{count}";

/// Grace period applied when a guild has not configured one.
pub const DEFAULT_DELETE_AFTER_SECONDS: i64 = 30;

/// Largest user limit Discord accepts on a voice channel; zero means unlimited.
pub const MAX_USER_LIMIT: u32 = 99;

/// Temporary voice channel configuration for a single guild.
#[derive(Debug, Clone, PartialEq)]
pub struct TempVoiceSettings {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Whether joining the creator channel spawns temporary channels.
    pub enabled: bool,
    /// Voice channel that triggers creation when joined.
    pub creator_channel_id: Option<u64>,
    /// Category that created channels are placed under.
    pub category_id: Option<u64>,
    /// Channel name template supporting `{count}` and `{user}` placeholders.
    pub name_template: String,
    /// Maximum members allowed in created channels.
    pub user_limit: Option<u32>,
    /// Bitrate of created channels in bits per second.
    pub bitrate: Option<u32>,
    /// Seconds an empty channel survives before deletion; zero or less deletes immediately.
    pub delete_after_seconds: i64,
    /// Timestamp of the last settings write.
    pub updated_at: DateTime<Utc>,
}

impl TempVoiceSettings {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Parses string IDs from the database into u64 values for type safety. Negative
    /// user limits or bitrates are treated as unset.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(TempVoiceSettings)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse one of the stored IDs as u64
    pub fn from_entity(entity: entity::temp_voice_settings::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        let creator_channel_id = entity
            .creator_channel_id
            .map(|id| id.parse::<u64>())
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to parse creator_channel_id: {}", e)))?;

        let category_id = entity
            .category_id
            .map(|id| id.parse::<u64>())
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to parse category_id: {}", e)))?;

        Ok(Self {
            guild_id,
            enabled: entity.enabled,
            creator_channel_id,
            category_id,
            name_template: entity.name_template,
            user_limit: entity.user_limit.and_then(|v| u32::try_from(v).ok()),
            bitrate: entity.bitrate.and_then(|v| u32::try_from(v).ok()),
            delete_after_seconds: entity.delete_after_seconds,
            updated_at: entity.updated_at,
        })
    }

    /// Returns the creator channel if the feature is enabled and one is configured.
    ///
    /// A disabled feature or missing creator channel is a configuration gap, not an
    /// error; callers simply skip creation.
    pub fn active_creator_channel(&self) -> Option<ChannelId> {
        if !self.enabled {
            return None;
        }

        self.creator_channel_id.filter(|id| *id != 0).map(ChannelId::new)
    }

    /// Grace period before an empty channel is deleted, clamped at zero.
    pub fn delete_after(&self) -> Duration {
        Duration::from_secs(self.delete_after_seconds.max(0) as u64)
    }
}

/// Parameters for creating or replacing a guild's temporary voice settings.
#[derive(Debug, Clone)]
pub struct UpsertTempVoiceSettingsParams {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Whether the feature is enabled.
    pub enabled: bool,
    /// Creator channel ID.
    pub creator_channel_id: Option<u64>,
    /// Parent category ID for created channels.
    pub category_id: Option<u64>,
    /// Channel name template, `None` for the default.
    pub name_template: Option<String>,
    /// Created channel user limit.
    pub user_limit: Option<u32>,
    /// Created channel bitrate.
    pub bitrate: Option<u32>,
    /// Grace period in seconds, `None` for the default.
    pub delete_after_seconds: Option<i64>,
}

impl UpsertTempVoiceSettingsParams {
    /// Creates parameters enabling the feature for `creator_channel_id` with defaults
    /// for everything else.
    pub fn enabled(guild_id: u64, creator_channel_id: u64) -> Self {
        Self {
            guild_id,
            enabled: true,
            creator_channel_id: Some(creator_channel_id),
            category_id: None,
            name_template: None,
            user_limit: None,
            bitrate: None,
            delete_after_seconds: None,
        }
    }
}
