use std::fmt::Display;
use std::sync::Arc;

use serenity::all::{ChannelId, GuildId, UserId};
use tokio::sync::{Mutex, MutexGuard};

use crate::server::error::platform::PlatformError;
use crate::server::model::temp_voice::TempVoiceSettings;

use super::counter::GuildCounter;
use super::name::render_channel_name;
use super::platform::{CreateVoiceChannel, VoicePlatform};
use super::record::{ArmedTimer, ChannelPhase, ChannelState, TempChannelRecord};
use super::store::ChannelStateStore;
use super::timer::{DeletionScheduler, TimerToken};
use super::update::MemberVoiceUpdate;

/// Audit log reason attached to deletions of empty temporary channels.
const DELETE_REASON: &str = "Temporary voice channel empty";

/// Mutable state guarded by the manager's lock.
#[derive(Default)]
struct ManagerState {
    store: ChannelStateStore,
    counter: GuildCounter,
    last_token: u64,
    /// Set by `shutdown`; later voice updates are ignored.
    closed: bool,
}

impl ManagerState {
    fn next_token(&mut self) -> TimerToken {
        self.last_token += 1;
        TimerToken::new(self.last_token)
    }
}

struct ManagerInner {
    platform: Arc<dyn VoicePlatform>,
    scheduler: Arc<dyn DeletionScheduler>,
    state: Mutex<ManagerState>,
}

/// Lifecycle manager for temporary voice channels.
///
/// Creates a channel when a member joins a guild's creator channel, moves the member
/// into it, and deletes the channel once it has stayed empty for the guild's grace
/// period. Voice updates and timer callbacks are serialized through one lock, held
/// across the Discord calls of a transition, so each transition completes before the
/// next one starts.
///
/// Cloning is cheap and yields a handle to the same manager.
#[derive(Clone)]
pub struct TempVoiceManager {
    inner: Arc<ManagerInner>,
}

impl TempVoiceManager {
    /// Creates a manager with an empty channel store.
    ///
    /// # Arguments
    /// - `platform` - Discord command sink
    /// - `scheduler` - Source of cancellable deletion timers
    pub fn new(platform: Arc<dyn VoicePlatform>, scheduler: Arc<dyn DeletionScheduler>) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                platform,
                scheduler,
                state: Mutex::new(ManagerState::default()),
            }),
        }
    }

    /// Applies a member's voice channel change.
    ///
    /// The leave side is processed before the join side. Settings are only consulted
    /// when the member joined a channel that is not already managed.
    ///
    /// # Arguments
    /// - `update` - Channel change of one member
    /// - `settings` - Guild settings, `None` when the guild has none or they failed to load
    pub async fn handle_voice_update(
        &self,
        update: &MemberVoiceUpdate,
        settings: Option<&TempVoiceSettings>,
    ) {
        let mut state = self.lock().await;

        if state.closed {
            tracing::debug!(
                "Ignoring voice update of member {} after shutdown",
                update.member_id
            );
            return;
        }

        if let Some(left) = update.left {
            self.on_member_left(&mut state, update.guild_id, left).await;
        }

        if let Some(joined) = update.joined {
            self.on_member_joined(&mut state, update, joined, settings)
                .await;
        }
    }

    /// Stops tracking a channel that was deleted outside the manager.
    ///
    /// Cancels a pending deletion timer. No delete command is issued.
    ///
    /// # Returns
    /// - `true` - The channel was managed and has been forgotten
    /// - `false` - The channel was not managed
    pub async fn forget_channel(&self, channel_id: ChannelId) -> bool {
        let mut state = self.lock().await;

        forget_record(&mut state, channel_id)
    }

    /// Stops tracking every channel of a guild the bot no longer belongs to.
    ///
    /// # Returns
    /// - `usize` - Number of records removed
    pub async fn forget_guild(&self, guild_id: GuildId) -> usize {
        let mut state = self.lock().await;

        let records = state.store.remove_guild(guild_id);
        let removed = records.len();
        for mut record in records {
            record.phase.disarm();
        }

        if removed > 0 {
            tracing::info!(
                "Forgot {} temporary channels of guild {}",
                removed,
                guild_id
            );
        }

        removed
    }

    /// Cancels every pending deletion, clears all state and stops accepting voice updates.
    ///
    /// Channels are left in place on Discord; they become unmanaged. Voice updates
    /// delivered afterwards create no channels and arm no timers.
    ///
    /// # Returns
    /// - `usize` - Number of deletion timers cancelled
    pub async fn shutdown(&self) -> usize {
        let mut state = self.lock().await;

        let records = state.store.drain();
        let tracked = records.len();
        let mut cancelled = 0;
        for mut record in records {
            if record.phase.disarm() {
                cancelled += 1;
            }
        }
        state.counter.clear();
        state.closed = true;

        tracing::info!(
            "Temporary voice manager shut down: released {} channels, cancelled {} timers",
            tracked,
            cancelled
        );

        cancelled
    }

    /// Lifecycle state of a channel.
    pub async fn channel_state(&self, channel_id: ChannelId) -> ChannelState {
        self.lock()
            .await
            .store
            .get(channel_id)
            .map(TempChannelRecord::state)
            .unwrap_or(ChannelState::Unmanaged)
    }

    /// Member whose join created a managed channel.
    pub async fn owner_of(&self, channel_id: ChannelId) -> Option<UserId> {
        self.lock()
            .await
            .store
            .get(channel_id)
            .map(|record| record.owner_id)
    }

    /// Number of channels currently managed.
    pub async fn managed_channel_count(&self) -> usize {
        self.lock().await.store.len()
    }

    /// Number of deletion timers currently armed.
    pub async fn pending_deletion_count(&self) -> usize {
        self.lock().await.store.armed_count()
    }

    async fn lock(&self) -> MutexGuard<'_, ManagerState> {
        self.inner.state.lock().await
    }

    async fn on_member_left(
        &self,
        state: &mut ManagerState,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) {
        let Some(record) = state.store.get(channel_id) else {
            return;
        };

        if record.armed_token().is_some() {
            tracing::debug!(
                "Deletion of temporary channel {} already pending",
                channel_id
            );
            return;
        }

        match self
            .inner
            .platform
            .channel_member_count(guild_id, channel_id)
            .await
        {
            Ok(0) => self.schedule_deletion(state, channel_id).await,
            Ok(connected) => {
                tracing::debug!(
                    "Temporary channel {} still has {} members",
                    channel_id,
                    connected
                );
            }
            Err(e) if e.is_not_found() => {
                forget_record(state, channel_id);
            }
            Err(e) => log_platform_failure("count members of channel", channel_id, &e),
        }
    }

    async fn on_member_joined(
        &self,
        state: &mut ManagerState,
        update: &MemberVoiceUpdate,
        channel_id: ChannelId,
        settings: Option<&TempVoiceSettings>,
    ) {
        if let Some(record) = state.store.get_mut(channel_id) {
            if record.phase.disarm() {
                tracing::info!(
                    "Member {} rejoined temporary channel {}, deletion cancelled",
                    update.member_id,
                    channel_id
                );
            }
            return;
        }

        let Some(settings) = settings else {
            return;
        };

        if settings.guild_id != update.guild_id.get()
            || settings.active_creator_channel() != Some(channel_id)
        {
            return;
        }

        self.create_channel_for(state, update, settings).await;
    }

    async fn create_channel_for(
        &self,
        state: &mut ManagerState,
        update: &MemberVoiceUpdate,
        settings: &TempVoiceSettings,
    ) {
        let guild_id = update.guild_id;
        let count = state.counter.next(guild_id);
        let request = CreateVoiceChannel {
            guild_id,
            name: render_channel_name(
                &settings.name_template,
                count,
                update.member_name.as_deref(),
            ),
            category_id: settings
                .category_id
                .filter(|id| *id != 0)
                .map(ChannelId::new),
            user_limit: settings.user_limit,
            bitrate: settings.bitrate,
        };

        let channel_id = match self.inner.platform.create_voice_channel(request).await {
            Ok(channel_id) => channel_id,
            Err(e) => {
                log_platform_failure("create temporary channel in guild", guild_id, &e);
                return;
            }
        };

        state.store.put(TempChannelRecord::new(
            channel_id,
            guild_id,
            update.member_id,
            settings.delete_after(),
        ));

        tracing::info!(
            "Created temporary channel {} in guild {} for member {}",
            channel_id,
            guild_id,
            update.member_id
        );

        if let Err(e) = self
            .inner
            .platform
            .move_member(guild_id, update.member_id, channel_id)
            .await
        {
            log_platform_failure("move member into temporary channel", channel_id, &e);

            // Nobody will leave a channel nobody entered; evaluate it now.
            self.on_member_left(state, guild_id, channel_id).await;
        }
    }

    async fn schedule_deletion(&self, state: &mut ManagerState, channel_id: ChannelId) {
        let Some(record) = state.store.get(channel_id) else {
            return;
        };

        if record.armed_token().is_some() {
            return;
        }

        let delay = record.delete_after;
        if delay.is_zero() {
            self.delete_now(state, channel_id).await;
            return;
        }

        let token = state.next_token();
        let manager = self.clone();
        let handle = self.inner.scheduler.arm(
            token,
            delay,
            Box::pin(async move {
                manager.on_timer_fired(channel_id, token).await;
            }),
        );

        match state.store.get_mut(channel_id) {
            Some(record) => {
                record.phase = ChannelPhase::PendingDeletion(ArmedTimer::new(handle));
                tracing::info!(
                    "Temporary channel {} is empty, deleting in {}s",
                    channel_id,
                    delay.as_secs()
                );
            }
            None => handle.cancel(),
        }
    }

    async fn on_timer_fired(&self, channel_id: ChannelId, token: TimerToken) {
        let mut state = self.lock().await;

        let Some(record) = state.store.get_mut(channel_id) else {
            tracing::debug!("Ignoring timer for unmanaged channel {}", channel_id);
            return;
        };

        if record.armed_token() != Some(token) {
            tracing::debug!(
                "Ignoring stale timer {} for channel {}",
                token.get(),
                channel_id
            );
            return;
        }

        // Consumes the firing timer without cancelling the task running this callback.
        record.phase = ChannelPhase::Occupied;
        let guild_id = record.guild_id;

        match self
            .inner
            .platform
            .channel_member_count(guild_id, channel_id)
            .await
        {
            Ok(0) => self.delete_now(&mut state, channel_id).await,
            Ok(connected) => {
                tracing::info!(
                    "Temporary channel {} was rejoined by {} members, keeping it",
                    channel_id,
                    connected
                );
            }
            Err(e) if e.is_not_found() => {
                forget_record(&mut state, channel_id);
            }
            Err(e) => log_platform_failure("count members of channel", channel_id, &e),
        }
    }

    async fn delete_now(&self, state: &mut ManagerState, channel_id: ChannelId) {
        let Some(mut record) = state.store.remove(channel_id) else {
            return;
        };
        record.phase.disarm();

        match self
            .inner
            .platform
            .delete_channel(channel_id, DELETE_REASON)
            .await
        {
            Ok(()) => tracing::info!(
                "Deleted temporary channel {} in guild {}",
                channel_id,
                record.guild_id
            ),
            Err(e) => log_platform_failure("delete temporary channel", channel_id, &e),
        }
    }
}

/// Removes a record without issuing a delete, cancelling its timer.
fn forget_record(state: &mut ManagerState, channel_id: ChannelId) -> bool {
    let Some(mut record) = state.store.remove(channel_id) else {
        return false;
    };
    record.phase.disarm();

    tracing::debug!(
        "Temporary channel {} no longer exists, record removed",
        channel_id
    );

    true
}

/// Logs a failed Discord command at the level its failure class calls for.
fn log_platform_failure(action: &str, target: impl Display, err: &PlatformError) {
    match err {
        PlatformError::Permission(_) => {
            tracing::warn!("Failed to {} {}: {}", action, target, err)
        }
        PlatformError::NotFound(_) => {
            tracing::debug!("Failed to {} {}: {}", action, target, err)
        }
        _ => tracing::error!("Failed to {} {}: {}", action, target, err),
    }
}
