//! Channel event handler for temporary voice channels.
//!
//! Keeps the manager from tracking channels that were removed by hand or by another
//! bot. Deletions issued by the manager itself arrive here too and are a no-op, since
//! the record is already gone by then.

use serenity::all::{Context, GuildChannel, Message};

use super::temp_voice_manager;

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// # Arguments
/// - `ctx` - Discord context holding the temporary voice manager
/// - `channel` - The deleted guild channel
/// - `_messages` - Cached messages of the channel (unused)
pub async fn handle_channel_delete(
    ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let Some(manager) = temp_voice_manager(&ctx).await else {
        return;
    };

    if manager.forget_channel(channel.id).await {
        tracing::info!(
            "Temporary channel {} in guild {} was deleted externally",
            channel.id,
            channel.guild_id
        );
    }
}
