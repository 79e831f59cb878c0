//! Discord commands used by the temporary voice manager.
//!
//! `VoicePlatform` is the seam between the lifecycle state machine and Discord. The
//! manager only ever talks to this trait, which keeps it testable without a gateway
//! connection. `SerenityVoicePlatform` is the production implementation on top of the
//! serenity client's HTTP client and cache.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serenity::all::{ChannelId, ChannelType, CreateChannel, GuildId, UserId};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::Http;

use crate::server::error::platform::PlatformError;

/// Upper bound for a single Discord API call issued by the manager.
pub const PLATFORM_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Audit log reason attached to channels created by the manager.
const CREATE_REASON: &str = "Temporary voice channel requested";

/// Parameters for creating a temporary voice channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVoiceChannel {
    pub guild_id: GuildId,
    pub name: String,
    pub category_id: Option<ChannelId>,
    pub user_limit: Option<u32>,
    pub bitrate: Option<u32>,
}

/// Discord operations required by the temporary voice manager.
///
/// Every operation may fail; implementations classify failures into `PlatformError` so
/// the manager can react without knowing the client library.
#[async_trait]
pub trait VoicePlatform: Send + Sync {
    /// Creates a voice channel and returns its ID.
    async fn create_voice_channel(
        &self,
        request: CreateVoiceChannel,
    ) -> Result<ChannelId, PlatformError>;

    /// Deletes a channel, recording `reason` in the audit log.
    async fn delete_channel(&self, channel_id: ChannelId, reason: &str)
        -> Result<(), PlatformError>;

    /// Moves a connected member into a voice channel.
    async fn move_member(
        &self,
        guild_id: GuildId,
        member_id: UserId,
        channel_id: ChannelId,
    ) -> Result<(), PlatformError>;

    /// Returns the number of members currently connected to a voice channel.
    ///
    /// Returns `PlatformError::NotFound` when the channel no longer exists.
    async fn channel_member_count(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<usize, PlatformError>;
}

/// `VoicePlatform` backed by serenity's HTTP client and gateway cache.
///
/// Voice occupancy is only observable through the gateway, so member counts are read
/// from the cached guild's voice states. The cache requires the `GUILDS` and
/// `GUILD_VOICE_STATES` intents.
#[derive(Clone)]
pub struct SerenityVoicePlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityVoicePlatform {
    /// Creates a platform from the client's shared HTTP client and cache.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client
    /// - `cache` - Gateway cache populated by the running client
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

/// Runs a serenity request under `PLATFORM_CALL_TIMEOUT`, mapping its error.
async fn with_timeout<T, F>(request: F) -> Result<T, PlatformError>
where
    F: Future<Output = Result<T, serenity::Error>>,
{
    match tokio::time::timeout(PLATFORM_CALL_TIMEOUT, request).await {
        Ok(result) => result.map_err(PlatformError::from),
        Err(_) => Err(PlatformError::Timeout(PLATFORM_CALL_TIMEOUT)),
    }
}

#[async_trait]
impl VoicePlatform for SerenityVoicePlatform {
    async fn create_voice_channel(
        &self,
        request: CreateVoiceChannel,
    ) -> Result<ChannelId, PlatformError> {
        let mut builder = CreateChannel::new(request.name)
            .kind(ChannelType::Voice)
            .audit_log_reason(CREATE_REASON);

        if let Some(category_id) = request.category_id {
            builder = builder.category(category_id);
        }
        if let Some(user_limit) = request.user_limit {
            builder = builder.user_limit(user_limit);
        }
        if let Some(bitrate) = request.bitrate {
            builder = builder.bitrate(bitrate);
        }

        let channel = with_timeout(request.guild_id.create_channel(&self.http, builder)).await?;

        Ok(channel.id)
    }

    async fn delete_channel(
        &self,
        channel_id: ChannelId,
        reason: &str,
    ) -> Result<(), PlatformError> {
        with_timeout(self.http.delete_channel(channel_id, Some(reason))).await?;

        Ok(())
    }

    async fn move_member(
        &self,
        guild_id: GuildId,
        member_id: UserId,
        channel_id: ChannelId,
    ) -> Result<(), PlatformError> {
        with_timeout(guild_id.move_member(&self.http, member_id, channel_id)).await?;

        Ok(())
    }

    async fn channel_member_count(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<usize, PlatformError> {
        // Guild refs must not be held across an await.
        let cached = self.cache.guild(guild_id).map(|guild| {
            let exists = guild.channels.contains_key(&channel_id);
            let connected = guild
                .voice_states
                .values()
                .filter(|state| state.channel_id == Some(channel_id))
                .count();

            (exists, connected)
        });

        match cached {
            Some((true, connected)) => Ok(connected),
            Some((false, connected)) => {
                // A channel created moments ago may not have reached the cache yet.
                with_timeout(self.http.get_channel(channel_id)).await?;
                Ok(connected)
            }
            None => Err(PlatformError::Unknown(format!(
                "Guild {} is not in the cache",
                guild_id
            ))),
        }
    }
}
