//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_voice_state;
//!
//! // Member 7 connected to channel 300 in guild 100
//! let joined = create_test_voice_state(100, 7, Some(300));
//! // Same member disconnected
//! let left = create_test_voice_state(100, 7, None);
//! ```
//!
//! # Available Factories
//!
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod voice_state;

pub use voice_state::{create_test_voice_state, create_test_voice_state_without_guild};
