//! Domain layer - Core business objects with no platform dependencies
//!
//! This layer contains:
//! - Entities: Messages, commands, replies and space-weather payloads
//! - Traits: Abstractions for infrastructure (Bot, SpaceWeatherApi)

pub mod entities;
pub mod traits;
