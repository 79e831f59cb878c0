use std::time::Duration;

use serenity::all::{ChannelId, GuildId, UserId};

use super::timer::{TimerHandle, TimerToken};

/// Observable lifecycle state of a voice channel from the manager's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// No record exists; the manager does not own the channel.
    Unmanaged,
    /// The manager owns the channel and believes at least one member is present.
    ManagedOccupied,
    /// The manager owns the channel, saw it empty and has a deletion timer armed.
    ManagedPendingDeletion,
}

/// Deletion timer owned by a record while its channel sits empty.
pub struct ArmedTimer {
    token: TimerToken,
    handle: TimerHandle,
}

impl ArmedTimer {
    pub fn new(handle: TimerHandle) -> Self {
        Self {
            token: handle.token(),
            handle,
        }
    }

    pub fn token(&self) -> TimerToken {
        self.token
    }

    /// Cancels the underlying scheduled task.
    pub fn cancel(self) {
        self.handle.cancel();
    }
}

/// Phase of a managed channel. A pending deletion always owns exactly one timer.
pub enum ChannelPhase {
    Occupied,
    PendingDeletion(ArmedTimer),
}

impl ChannelPhase {
    /// Disarms the phase, cancelling the timer if one was armed.
    ///
    /// # Returns
    /// - `true` - A timer was armed and has been cancelled
    /// - `false` - The phase was already occupied
    pub fn disarm(&mut self) -> bool {
        match std::mem::replace(self, ChannelPhase::Occupied) {
            ChannelPhase::PendingDeletion(timer) => {
                timer.cancel();
                true
            }
            ChannelPhase::Occupied => false,
        }
    }
}

/// In-memory metadata for one live temporary voice channel.
pub struct TempChannelRecord {
    /// Channel created by the manager; key of the store.
    pub channel_id: ChannelId,
    /// Guild the channel belongs to.
    pub guild_id: GuildId,
    /// Member whose join created the channel. Reserved, never used for authorization.
    pub owner_id: UserId,
    /// Grace period between the channel emptying and its deletion.
    pub delete_after: Duration,
    /// Occupancy phase and the deletion timer it owns.
    pub phase: ChannelPhase,
}

impl TempChannelRecord {
    /// Creates a record for a freshly created, occupied channel.
    pub fn new(
        channel_id: ChannelId,
        guild_id: GuildId,
        owner_id: UserId,
        delete_after: Duration,
    ) -> Self {
        Self {
            channel_id,
            guild_id,
            owner_id,
            delete_after,
            phase: ChannelPhase::Occupied,
        }
    }

    pub fn state(&self) -> ChannelState {
        match self.phase {
            ChannelPhase::Occupied => ChannelState::ManagedOccupied,
            ChannelPhase::PendingDeletion(_) => ChannelState::ManagedPendingDeletion,
        }
    }

    /// Token of the armed deletion timer, if any.
    pub fn armed_token(&self) -> Option<TimerToken> {
        match &self.phase {
            ChannelPhase::PendingDeletion(timer) => Some(timer.token()),
            ChannelPhase::Occupied => None,
        }
    }
}
