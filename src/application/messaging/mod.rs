//! Message handling - Turning chat messages into command invocations

pub mod dispatcher;
pub mod parser;

pub use dispatcher::CommandDispatcher;
pub use parser::MessageParser;
