//! Discord relay for Auroras.live space-weather data
//!
//! Chat commands (`!aurora`, `!cameras`, `!charts`, `!satellites`,
//! `!view`, `!help`) are parsed, turned into API requests and answered
//! with embeds or image attachments in the originating channel.

pub mod domain;
pub mod application;
pub mod infrastructure;
