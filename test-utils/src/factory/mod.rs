//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults into the test database, reducing
//! boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let settings = factory::temp_voice_settings::create_settings(&db).await?;
//!
//! let disabled = factory::temp_voice_settings::TempVoiceSettingsFactory::new(&db)
//!     .enabled(false)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod temp_voice_settings;

pub use temp_voice_settings::create_settings;
