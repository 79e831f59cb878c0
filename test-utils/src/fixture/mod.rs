//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to unit
//! test domain conversions and as default values for factories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let settings = fixture::temp_voice_settings::entity_builder()
//!     .creator_channel_id(Some("42"))
//!     .delete_after_seconds(0)
//!     .build();
//! ```

pub mod temp_voice_settings;

pub use temp_voice_settings::{
    entity as temp_voice_settings_entity, entity_builder as temp_voice_settings_entity_builder,
};
