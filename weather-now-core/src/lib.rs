//! Core library for the `weather-now` CLI.
//!
//! This crate defines:
//! - Configuration, including endpoint URLs and fallback units
//! - The Open-Meteo provider behind the [`WeatherProvider`] trait
//! - The city → place → current conditions fetch cycle
//! - Weather code mapping, request state and text rendering
//!
//! It is used by `weather-now-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;
pub mod render;
pub mod state;

pub use codes::WeatherIcon;
pub use config::{Config, Endpoints, Measure, UnitDefaults};
pub use error::{ErrorKind, FetchError};
pub use fetch::fetch_weather;
pub use model::{CurrentConditions, DisplayRecord, Observation, Place, Units};
pub use provider::{WeatherProvider, openmeteo::OpenMeteoProvider, provider_from_config};
pub use state::{RequestState, Session, Ticket};
