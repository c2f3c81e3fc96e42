//! Onslaught Server Library
//!
//! Aggregating proxy over the Bungie.net platform API: player search and
//! Onslaught activity history for the browser UI.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use models::{Activity, AlternateName, Character, User};
pub use services::{ActivityFilter, ActivityService, PlayerService, SkipReason};
pub use state::AppState;
