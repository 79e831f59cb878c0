
use super::*;
use crate::server::{error::platform::PlatformError, model::temp_voice::TempVoiceSettings};
use serenity::all::{ChannelId, GuildId, UserId};
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_utils::fixture;

/// Guild used by the scenarios.
fn guild() -> GuildId {
    GuildId::new(100)
}

/// Creator channel configured by `settings`.
fn creator() -> ChannelId {
    ChannelId::new(200)
}

fn member(id: u64) -> UserId {
    UserId::new(id)
}

/// Enabled settings for `guild()` with `creator()` as creator channel.
fn settings(delete_after_seconds: i64) -> TempVoiceSettings {
    TempVoiceSettings::from_entity(
        fixture::temp_voice_settings::entity_builder()
            .guild_id("100")
            .creator_channel_id(Some("200"))
            .delete_after_seconds(delete_after_seconds)
            .build(),
    )
    .unwrap()
}

#[derive(Default)]
struct FakeState {
    last_channel_id: u64,
    /// Existing channels and their connected member count.
    occupancy: HashMap<ChannelId, usize>,
    created: Vec<CreateVoiceChannel>,
    deleted: Vec<ChannelId>,
    moves: Vec<(UserId, ChannelId)>,
    fail_create: Option<PlatformError>,
    fail_move: Option<PlatformError>,
    fail_delete: Option<PlatformError>,
    fail_count: Option<PlatformError>,
}

/// In-memory Discord recording every command it receives.
#[derive(Default)]
struct FakePlatform {
    state: Mutex<FakeState>,
}

impl FakePlatform {
    fn set_members(&self, channel_id: ChannelId, count: usize) {
        self.state.lock().unwrap().occupancy.insert(channel_id, count);
    }

    /// Removes a channel as if an admin deleted it by hand.
    fn remove_channel(&self, channel_id: ChannelId) {
        self.state.lock().unwrap().occupancy.remove(&channel_id);
    }

    fn fail_create(&self, err: PlatformError) {
        self.state.lock().unwrap().fail_create = Some(err);
    }

    fn fail_move(&self, err: PlatformError) {
        self.state.lock().unwrap().fail_move = Some(err);
    }

    fn fail_delete(&self, err: PlatformError) {
        self.state.lock().unwrap().fail_delete = Some(err);
    }

    fn fail_count(&self, err: Option<PlatformError>) {
        self.state.lock().unwrap().fail_count = err;
    }

    fn created(&self) -> Vec<CreateVoiceChannel> {
        self.state.lock().unwrap().created.clone()
    }

    fn deleted(&self) -> Vec<ChannelId> {
        self.state.lock().unwrap().deleted.clone()
    }

    fn moves(&self) -> Vec<(UserId, ChannelId)> {
        self.state.lock().unwrap().moves.clone()
    }
}

#[async_trait]
impl VoicePlatform for FakePlatform {
    async fn create_voice_channel(
        &self,
        request: CreateVoiceChannel,
    ) -> Result<ChannelId, PlatformError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.fail_create.clone() {
            return Err(err);
        }

        state.last_channel_id += 1;
        let channel_id = ChannelId::new(900 + state.last_channel_id);
        state.occupancy.insert(channel_id, 0);
        state.created.push(request);

        Ok(channel_id)
    }

    async fn delete_channel(
        &self,
        channel_id: ChannelId,
        _reason: &str,
    ) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        state.deleted.push(channel_id);
        if let Some(err) = state.fail_delete.clone() {
            return Err(err);
        }

        match state.occupancy.remove(&channel_id) {
            Some(_) => Ok(()),
            None => Err(PlatformError::NotFound(format!("channel {}", channel_id))),
        }
    }

    async fn move_member(
        &self,
        _guild_id: GuildId,
        member_id: UserId,
        channel_id: ChannelId,
    ) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.fail_move.clone() {
            return Err(err);
        }

        state.moves.push((member_id, channel_id));
        *state.occupancy.entry(channel_id).or_insert(0) += 1;

        Ok(())
    }

    async fn channel_member_count(
        &self,
        _guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<usize, PlatformError> {
        let state = self.state.lock().unwrap();
        if let Some(err) = state.fail_count.clone() {
            return Err(err);
        }

        state
            .occupancy
            .get(&channel_id)
            .copied()
            .ok_or_else(|| PlatformError::NotFound(format!("channel {}", channel_id)))
    }
}

struct PendingTimer {
    token: TimerToken,
    due: Duration,
    cancelled: Arc<AtomicBool>,
    task: TimerTask,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    armed_total: usize,
    pending: Vec<PendingTimer>,
}

/// Scheduler driven by a simulated clock.
///
/// Timers only fire when `advance` moves the clock past their due time, and their
/// callbacks run to completion on the test task.
#[derive(Default, Clone)]
struct ManualScheduler {
    clock: Arc<Mutex<ClockState>>,
}

impl ManualScheduler {
    /// Timers armed and neither cancelled nor fired.
    fn live_timers(&self) -> usize {
        self.clock
            .lock()
            .unwrap()
            .pending
            .iter()
            .filter(|timer| !timer.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Timers ever armed.
    fn armed_total(&self) -> usize {
        self.clock.lock().unwrap().armed_total
    }

    /// Moves the clock forward and runs every live timer that became due, in due order.
    async fn advance(&self, by: Duration) {
        let due = {
            let mut clock = self.clock.lock().unwrap();
            clock.now += by;
            let now = clock.now;

            let (mut due, pending): (Vec<_>, Vec<_>) = clock
                .pending
                .drain(..)
                .partition(|timer| timer.due <= now);
            clock.pending = pending;

            due.retain(|timer| !timer.cancelled.load(Ordering::SeqCst));
            due.sort_by_key(|timer| timer.due);
            due
        };

        for timer in due {
            timer.task.await;
        }
    }

    /// Takes a timer's callback even if it was cancelled.
    ///
    /// Models a tokio task that had already woken up and was waiting for the manager's
    /// lock when the cancellation arrived.
    fn take_task(&self, token: TimerToken) -> Option<TimerTask> {
        let mut clock = self.clock.lock().unwrap();
        let index = clock.pending.iter().position(|timer| timer.token == token)?;

        Some(clock.pending.remove(index).task)
    }

    /// Token of the most recently armed timer still pending.
    fn last_token(&self) -> Option<TimerToken> {
        self.clock
            .lock()
            .unwrap()
            .pending
            .iter()
            .map(|timer| timer.token)
            .max()
    }
}

impl DeletionScheduler for ManualScheduler {
    fn arm(&self, token: TimerToken, delay: Duration, task: TimerTask) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let mut clock = self.clock.lock().unwrap();
        let due = clock.now + delay;
        clock.armed_total += 1;
        clock.pending.push(PendingTimer {
            token,
            due,
            cancelled,
            task,
        });

        TimerHandle::new(token, move || flag.store(true, Ordering::SeqCst))
    }
}

struct Harness {
    manager: TempVoiceManager,
    platform: Arc<FakePlatform>,
    scheduler: ManualScheduler,
}

fn harness() -> Harness {
    let platform = Arc::new(FakePlatform::default());
    let scheduler = ManualScheduler::default();
    let manager = TempVoiceManager::new(platform.clone(), Arc::new(scheduler.clone()));

    Harness {
        manager,
        platform,
        scheduler,
    }
}

impl Harness {
    /// Has `member_id` join the creator channel and returns the channel created for them.
    async fn create_channel(&self, member_id: UserId, settings: &TempVoiceSettings) -> ChannelId {
        self.manager
            .handle_voice_update(
                &MemberVoiceUpdate::join(guild(), member_id, creator()),
                Some(settings),
            )
            .await;

        self.platform
            .moves()
            .last()
            .map(|(_, channel_id)| *channel_id)
            .expect("member was not moved into a new channel")
    }

    /// Empties `channel_id` and delivers the last member's leave event.
    async fn last_member_leaves(&self, member_id: UserId, channel_id: ChannelId) {
        self.platform.set_members(channel_id, 0);
        self.manager
            .handle_voice_update(&MemberVoiceUpdate::leave(guild(), member_id, channel_id), None)
            .await;
    }
}
