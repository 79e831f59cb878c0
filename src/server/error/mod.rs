//! Error types for the bot process.
//!
//! `AppError` is the top-level error returned from startup and from fallible service
//! calls. Discord command failures raised by the temporary voice manager use the narrower
//! `PlatformError`, which classifies failures so the manager can decide how loudly to log
//! them; those never escalate into `AppError` because every failure is local to the event
//! that triggered it.

pub mod config;
pub mod platform;

use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the error types that can occur while starting or running the bot. Most
/// variants use `#[from]` so `?` converts them automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, raised while installing the shutdown signal listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
