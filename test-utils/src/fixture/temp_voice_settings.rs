//! Temporary voice settings fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::temp_voice_settings;

/// Default guild ID for settings fixtures.
pub const DEFAULT_GUILD_ID: &str = "100";

/// Default creator channel ID for settings fixtures.
pub const DEFAULT_CREATOR_CHANNEL_ID: &str = "200";

/// Default channel name template.
pub const DEFAULT_NAME_TEMPLATE: &str = "Temp Channel #{count}";

/// Default grace period in seconds.
pub const DEFAULT_DELETE_AFTER_SECONDS: i64 = 30;

/// Creates an enabled settings entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - guild_id: `"100"`
/// - enabled: `true`
/// - creator_channel_id: `Some("200")`
/// - category_id: `None`
/// - name_template: `"Temp Channel #{count}"`
/// - user_limit / bitrate: `None`
/// - delete_after_seconds: `30`
///
/// # Returns
/// - `temp_voice_settings::Model` - In-memory settings entity
pub fn entity() -> temp_voice_settings::Model {
    entity_builder().build()
}

/// Creates a settings entity builder for customization.
pub fn entity_builder() -> TempVoiceSettingsEntityBuilder {
    TempVoiceSettingsEntityBuilder::default()
}

/// Builder for creating customized settings entity models.
pub struct TempVoiceSettingsEntityBuilder {
    guild_id: String,
    enabled: bool,
    creator_channel_id: Option<String>,
    category_id: Option<String>,
    name_template: String,
    user_limit: Option<i32>,
    bitrate: Option<i32>,
    delete_after_seconds: i64,
}

impl Default for TempVoiceSettingsEntityBuilder {
    fn default() -> Self {
        Self {
            guild_id: DEFAULT_GUILD_ID.to_string(),
            enabled: true,
            creator_channel_id: Some(DEFAULT_CREATOR_CHANNEL_ID.to_string()),
            category_id: None,
            name_template: DEFAULT_NAME_TEMPLATE.to_string(),
            user_limit: None,
            bitrate: None,
            delete_after_seconds: DEFAULT_DELETE_AFTER_SECONDS,
        }
    }
}

impl TempVoiceSettingsEntityBuilder {
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

    /// Sets the parent category ID.
    pub fn category_id(mut self, category_id: Option<&str>) -> Self {
        self.category_id = category_id.map(str::to_string);
        self
    }

    /// Sets the channel name template.
    pub fn name_template(mut self, template: impl Into<String>) -> Self {
        self.name_template = template.into();
        self
    }

    /// Sets the user limit.
    pub fn user_limit(mut self, user_limit: Option<i32>) -> Self {
        self.user_limit = user_limit;
        self
    }

    /// Sets the bitrate.
    pub fn bitrate(mut self, bitrate: Option<i32>) -> Self {
        self.bitrate = bitrate;
        self
    }

    /// Sets the grace period in seconds.
    pub fn delete_after_seconds(mut self, seconds: i64) -> Self {
        self.delete_after_seconds = seconds;
        self
    }

    /// Builds the settings entity model.
    pub fn build(self) -> temp_voice_settings::Model {
        temp_voice_settings::Model {
            id: 1,
            guild_id: self.guild_id,
            enabled: self.enabled,
            creator_channel_id: self.creator_channel_id,
            category_id: self.category_id,
            name_template: self.name_template,
            user_limit: self.user_limit,
            bitrate: self.bitrate,
            delete_after_seconds: self.delete_after_seconds,
            updated_at: Utc.timestamp_opt(1_767_225_600, 0).unwrap(),
        }
    }
}
