//! Temporary voice channel lifecycle management.
//!
//! When a member joins a guild's designated creator channel, the manager creates a new
//! voice channel from the guild's name template and moves the member into it. Once the
//! channel empties, a deletion timer is armed for the guild's grace period; rejoining
//! cancels it, and when it fires the live member count is checked again before the
//! channel is deleted.
//!
//! # Components
//!
//! - `store` - In-memory table of managed channels
//! - `counter` - Per-guild sequence numbers for channel names
//! - `timer` - Cancellable deletion timers behind a scheduler trait
//! - `platform` - Discord commands behind the `VoicePlatform` trait
//! - `manager` - The lifecycle state machine
//!
//! # Channel States
//!
//! - **Unmanaged** - No record; the manager does not own the channel
//! - **ManagedOccupied** - Record without an armed timer
//! - **ManagedPendingDeletion** - Record owning exactly one armed timer
//!
//! State lives only in memory. After a restart, channels created earlier are no longer
//! managed and are left alone.

pub mod counter;
pub mod manager;
pub mod name;
pub mod platform;
pub mod record;
pub mod store;
pub mod timer;
pub mod update;

pub use manager::TempVoiceManager;
pub use platform::{CreateVoiceChannel, SerenityVoicePlatform, VoicePlatform};
pub use record::ChannelState;
pub use timer::{DeletionScheduler, TimerHandle, TimerTask, TimerToken, TokioScheduler};
pub use update::MemberVoiceUpdate;

#[cfg(test)]
mod test;
