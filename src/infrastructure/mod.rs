//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Auroras: The space-weather HTTP client
//! - Adapters: Platform integrations (Discord, console)

pub mod config;
pub mod auroras;
pub mod adapters;
