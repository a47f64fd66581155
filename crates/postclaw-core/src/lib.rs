//! # PostClaw Core
//! Shared configuration, error taxonomy, and data model.

pub mod config;
pub mod error;
pub mod types;

pub use config::PostClawConfig;
pub use error::{PostClawError, Result};
