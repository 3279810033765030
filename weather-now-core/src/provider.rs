use crate::{
    Config,
    error::FetchError,
    model::{Observation, Place},
    provider::openmeteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// The two lookups a fetch cycle performs, in order.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Best match for a free-text city name, or `None` if nothing matched.
    async fn search_place(&self, city: &str) -> Result<Option<Place>, FetchError>;

    /// Current conditions at `place`, or `None` if the response carried none.
    async fn current_conditions(&self, place: &Place) -> Result<Option<Observation>, FetchError>;
}

/// Construct the Open-Meteo provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = OpenMeteoProvider::from_config(config)?;
    Ok(Box::new(provider))
}
