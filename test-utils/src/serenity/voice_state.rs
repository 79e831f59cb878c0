//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState for a guild member.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `user_id` - Discord user ID of the member
/// - `channel_id` - Voice channel the member is connected to, `None` when disconnected
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(guild_id: u64, user_id: u64, channel_id: Option<u64>) -> VoiceState {
    build_voice_state(Some(guild_id), user_id, channel_id)
}

/// Creates a test VoiceState carrying no guild ID, as delivered for direct-message calls.
pub fn create_test_voice_state_without_guild(user_id: u64, channel_id: Option<u64>) -> VoiceState {
    build_voice_state(None, user_id, channel_id)
}

fn build_voice_state(guild_id: Option<u64>, user_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.map(|id| id.to_string()),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": null,
        "session_id": format!("session-{}", user_id),
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null
    }))
    .expect("Failed to deserialize test voice state")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_connected_voice_state() {
        let state = create_test_voice_state(100, 7, Some(300));

        assert_eq!(state.guild_id.map(|id| id.get()), Some(100));
        assert_eq!(state.user_id.get(), 7);
        assert_eq!(state.channel_id.map(|id| id.get()), Some(300));
    }

    #[test]
    fn creates_disconnected_voice_state() {
        let state = create_test_voice_state(100, 7, None);

        assert!(state.channel_id.is_none());
    }

    #[test]
    fn creates_voice_state_without_guild() {
        let state = create_test_voice_state_without_guild(7, Some(300));

        assert!(state.guild_id.is_none());
    }
}
