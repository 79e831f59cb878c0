//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and carry
//! type-safe representations of persisted configuration to the service layer and the
//! temporary voice manager.

pub mod temp_voice;
