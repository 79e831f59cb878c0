//! Temporary voice channel bot backend.
//!
//! Members joining a guild's creator channel get a voice channel of their own; the
//! channel is deleted once it has stayed empty for the guild's grace period.
//!
//! # Architecture
//!
//! - **Bot Layer** (`bot/`) - Gateway event handlers and client construction
//! - **Service Layer** (`service/`) - The temporary voice manager and settings access
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application and Discord failure types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection and migrations
//!
//! # Event Flow
//!
//! 1. **Bot** receives a voice state update and reduces it to a channel change
//! 2. **Service** loads the guild's settings when the member joined a channel
//! 3. **Manager** creates, keeps, or schedules deletion of temporary channels
//! 4. **Platform** issues the resulting commands to Discord

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
