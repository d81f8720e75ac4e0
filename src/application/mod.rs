//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Command handlers, response formatting, relaying replies
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing and command dispatching

pub mod errors;
pub mod services;
pub mod messaging;
