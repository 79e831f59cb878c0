//! Voice state handler driving the temporary voice channel lifecycle.
//!
//! Every voice state update that moves a member between channels is converted into a
//! `MemberVoiceUpdate` and handed to the manager. Guild settings are loaded from the
//! database only when the member joined a channel, since leaves never create channels.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, VoiceState};

use crate::server::service::temp_voice::MemberVoiceUpdate;
use crate::server::service::temp_voice_settings::TempVoiceSettingsService;

use super::temp_voice_manager;

/// Handles the voice_state_update event.
///
/// Mute, deafen and streaming toggles keep the member in the same channel and are
/// ignored. A settings lookup failure is logged and treated as missing settings, so
/// cleanup of already managed channels continues.
///
/// # Arguments
/// - `db` - Database connection for loading guild settings
/// - `ctx` - Discord context holding the temporary voice manager
/// - `old` - Cached voice state before the change, if any
/// - `new` - Voice state after the change
pub async fn handle_voice_state_update(
    db: &DatabaseConnection,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(update) = MemberVoiceUpdate::from_voice_states(old.as_ref(), &new) else {
        return;
    };

    let Some(manager) = temp_voice_manager(&ctx).await else {
        return;
    };

    let settings = match update.joined {
        Some(_) => {
            match TempVoiceSettingsService::new(db)
                .get_active(update.guild_id.get())
                .await
            {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::error!(
                        "Failed to load temporary voice settings for guild {}: {}",
                        update.guild_id,
                        e
                    );
                    None
                }
            }
        }
        None => None,
    };

    manager.handle_voice_update(&update, settings.as_ref()).await;
}
