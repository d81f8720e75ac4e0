//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod space_weather;

pub use bot::Bot;
pub use space_weather::SpaceWeatherApi;
