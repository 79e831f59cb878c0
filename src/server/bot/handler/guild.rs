//! Guild event handler for temporary voice channels.

use serenity::all::{Context, Guild, UnavailableGuild};

use super::temp_voice_manager;

/// Handles the guild_delete event.
///
/// When the bot was removed from the guild, every record of that guild is dropped
/// along with its pending timers. An outage (`unavailable`) keeps the records, since
/// the guild and its channels come back once Discord recovers.
///
/// # Arguments
/// - `ctx` - Discord context holding the temporary voice manager
/// - `incomplete` - ID and availability of the removed guild
/// - `_full` - Cached guild data (unused)
pub async fn handle_guild_delete(ctx: Context, incomplete: UnavailableGuild, _full: Option<Guild>) {
    if incomplete.unavailable {
        tracing::warn!(
            "Guild {} became unavailable, keeping its temporary channels",
            incomplete.id
        );
        return;
    }

    let Some(manager) = temp_voice_manager(&ctx).await else {
        return;
    };

    manager.forget_guild(incomplete.id).await;
}
