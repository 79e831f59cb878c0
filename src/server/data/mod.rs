//! Database repository layer.
//!
//! Repositories handle database operations for persisted configuration. They use SeaORM
//! entity models internally and return domain models to keep the data layer separate from
//! the service layer.

pub mod temp_voice;

pub use temp_voice::TempVoiceSettingsRepository;

#[cfg(test)]
mod test;
