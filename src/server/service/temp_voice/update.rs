use serenity::all::{ChannelId, GuildId, UserId, VoiceState};

/// A member's voice connection moving between channels in one guild.
///
/// A switch carries both `left` and `joined` and is processed as a leave followed by a
/// join. The two are never equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberVoiceUpdate {
    pub guild_id: GuildId,
    pub member_id: UserId,
    /// Display name of the member, used for channel name templating.
    pub member_name: Option<String>,
    /// Channel the member disconnected from.
    pub left: Option<ChannelId>,
    /// Channel the member connected to.
    pub joined: Option<ChannelId>,
}

impl MemberVoiceUpdate {
    /// Builds an update from a gateway voice state change.
    ///
    /// Returns `None` for changes that do not move the member between channels, such as
    /// mute or deafen toggles, and for voice states outside a guild.
    ///
    /// # Arguments
    /// - `old` - Cached voice state before the change, if the cache had one
    /// - `new` - Voice state delivered by the gateway
    pub fn from_voice_states(old: Option<&VoiceState>, new: &VoiceState) -> Option<Self> {
        let guild_id = new.guild_id.or_else(|| old.and_then(|state| state.guild_id))?;
        let left = old.and_then(|state| state.channel_id);
        let joined = new.channel_id;

        if left == joined {
            return None;
        }

        Some(Self {
            guild_id,
            member_id: new.user_id,
            member_name: new
                .member
                .as_ref()
                .map(|member| member.display_name().to_string()),
            left,
            joined,
        })
    }

    /// Update for a member connecting to `channel_id` without a previous channel.
    pub fn join(guild_id: GuildId, member_id: UserId, channel_id: ChannelId) -> Self {
        Self {
            guild_id,
            member_id,
            member_name: None,
            left: None,
            joined: Some(channel_id),
        }
    }

    /// Update for a member disconnecting from `channel_id`.
    pub fn leave(guild_id: GuildId, member_id: UserId, channel_id: ChannelId) -> Self {
        Self {
            guild_id,
            member_id,
            member_name: None,
            left: Some(channel_id),
            joined: None,
        }
    }

    /// Update for a member moving directly from `from` to `to`.
    pub fn switch(guild_id: GuildId, member_id: UserId, from: ChannelId, to: ChannelId) -> Self {
        Self {
            guild_id,
            member_id,
            member_name: None,
            left: Some(from),
            joined: Some(to),
        }
    }

    /// Sets the member display name.
    pub fn with_member_name(mut self, name: impl Into<String>) -> Self {
        self.member_name = Some(name.into());
        self
    }
}
