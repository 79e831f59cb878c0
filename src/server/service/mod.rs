//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's event handlers and the data layer:
//!
//! - **temp_voice**: Temporary voice channel lifecycle manager
//! - **temp_voice_settings**: Per-guild configuration the manager acts on

pub mod temp_voice;
pub mod temp_voice_settings;
