use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildChannel, Message, Ready, UnavailableGuild, VoiceState,
};
use serenity::async_trait;

use crate::server::bot::start::TempVoiceManagerKey;
use crate::server::service::temp_voice::TempVoiceManager;

pub mod channel;
pub mod guild;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member connects to, disconnects from, or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.db, ctx, old, new).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(ctx, channel, messages).await;
    }

    /// Called when the bot leaves a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(ctx, incomplete, full).await;
    }
}

/// Fetches the temporary voice manager registered in the client's type map.
///
/// Logs an error and returns `None` when the client was built without one.
async fn temp_voice_manager(ctx: &Context) -> Option<TempVoiceManager> {
    let manager = ctx.data.read().await.get::<TempVoiceManagerKey>().cloned();

    if manager.is_none() {
        tracing::error!("Temporary voice manager missing from client data");
    }

    manager
}
