use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;

use crate::{
    Config,
    error::FetchError,
    model::{CurrentConditions, Observation, Place, Units},
};

use super::WeatherProvider;

/// Fields requested from the forecast endpoint's `current` block.
pub const CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "precipitation",
    "weather_code",
    "wind_speed_10m",
    "wind_direction_10m",
];

const GEOCODING: &str = "geocoding";
const FORECAST: &str = "forecast";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    geocoding_url: String,
    forecast_url: String,
    language: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(geocoding_url: &str, forecast_url: &str) -> Self {
        Self {
            geocoding_url: geocoding_url.trim_end_matches('/').to_string(),
            forecast_url: forecast_url.trim_end_matches('/').to_string(),
            language: "en".to_string(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            language: config.language.clone(),
            ..Self::new(&config.endpoints.geocoding_url, &config.endpoints.forecast_url)
        })
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<Place>>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
    #[serde(default)]
    current_units: Option<Units>,
}

/// Error body the API returns alongside 4xx statuses.
#[derive(Debug, Deserialize)]
struct ApiError {
    reason: String,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn search_place(&self, city: &str) -> Result<Option<Place>, FetchError> {
        let url = format!("{}/v1/search", self.geocoding_url);
        tracing::debug!(%url, city, "geocoding request");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Request { endpoint: GEOCODING, source })?;

        let parsed: GeocodingResponse = read_json(res, GEOCODING).await?;

        Ok(parsed.results.and_then(|results| results.into_iter().next()))
    }

    async fn current_conditions(&self, place: &Place) -> Result<Option<Observation>, FetchError> {
        let url = format!("{}/v1/forecast", self.forecast_url);
        tracing::debug!(%url, latitude = place.latitude, longitude = place.longitude, "forecast request");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", place.latitude.to_string()),
                ("longitude", place.longitude.to_string()),
                ("current", CURRENT_FIELDS.join(",")),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Request { endpoint: FORECAST, source })?;

        let parsed: ForecastResponse = read_json(res, FORECAST).await?;

        Ok(parsed.current.map(|conditions| Observation {
            conditions,
            units: parsed.current_units.unwrap_or_default(),
        }))
    }
}

async fn read_json<T: DeserializeOwned>(res: Response, endpoint: &'static str) -> Result<T, FetchError> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| FetchError::Request { endpoint, source })?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ApiError>(&body)
            .map(|e| e.reason)
            .unwrap_or_else(|_| truncate_body(&body));
        tracing::warn!(endpoint, status = status.as_u16(), %detail, "request failed");
        return Err(FetchError::Status { endpoint, status: status.as_u16(), detail });
    }

    serde_json::from_str(&body).map_err(|source| FetchError::Parse { endpoint, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
