//! Scheduling abstraction for deferred channel deletion.
//!
//! The manager never sleeps itself. It hands a callback to a `DeletionScheduler` and keeps
//! the returned `TimerHandle` so the deletion can be cancelled if the channel fills up
//! again. Production uses `TokioScheduler`; tests drive a simulated clock instead.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Callback run when a deletion timer fires.
pub type TimerTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Identifies one arming of a deletion timer.
///
/// Tokens are never reused within a manager, so a callback can tell whether the timer it
/// belongs to is still the one armed on its channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Cancellation handle for a scheduled deletion.
///
/// Dropping the handle leaves the timer running; only `cancel` stops it.
pub struct TimerHandle {
    token: TimerToken,
    canceller: Box<dyn FnOnce() + Send + Sync>,
}

impl TimerHandle {
    pub fn new(token: TimerToken, canceller: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            token,
            canceller: Box::new(canceller),
        }
    }

    pub fn token(&self) -> TimerToken {
        self.token
    }

    pub fn cancel(self) {
        (self.canceller)();
    }
}

/// Source of cancellable delayed callbacks.
pub trait DeletionScheduler: Send + Sync + 'static {
    /// Schedules `task` to run once after `delay`.
    ///
    /// # Arguments
    /// - `token` - Token identifying this arming, echoed by the returned handle
    /// - `delay` - Time to wait before running the task
    /// - `task` - Callback to run when the timer fires
    ///
    /// # Returns
    /// - `TimerHandle` - Handle that cancels the task if it has not run yet
    fn arm(&self, token: TimerToken, delay: Duration, task: TimerTask) -> TimerHandle;
}

/// Scheduler backed by `tokio::time::sleep` on a spawned task.
///
/// Cancelling aborts the spawned task. Must be used from within a tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl DeletionScheduler for TokioScheduler {
    fn arm(&self, token: TimerToken, delay: Duration, task: TimerTask) -> TimerHandle {
        let join = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        TimerHandle::new(token, move || join.abort())
    }
}
