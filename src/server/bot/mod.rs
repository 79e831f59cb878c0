//! Discord bot integration for temporary voice channels.
//!
//! The bot forwards gateway events to the temporary voice manager: voice state changes
//! drive channel creation and cleanup, while channel and guild removals keep the
//! manager's records in line with what still exists on Discord.
//!
//! The client is built first so the manager can share its HTTP client and cache. The
//! manager is then stored in the client's type map, where every event handler can
//! reach it.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel lifecycle events and populate the channel cache
//! - `GUILD_VOICE_STATES` - Receive voice state updates and track members per voice channel
//!
//! Neither intent is privileged.

pub mod handler;
pub mod start;
