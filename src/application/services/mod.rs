//! Application services - Command handlers, formatting and relaying

pub mod command_service;
pub mod formatter;
pub mod message_service;

#[cfg(test)]
pub(crate) mod testing;

pub use command_service::CommandService;
pub use message_service::MessageService;
