//! SeaORM entity models for the tempvoice settings database.

pub mod prelude;

pub mod temp_voice_settings;
