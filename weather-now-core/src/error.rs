use thiserror::Error;

/// How a failed lookup is classified. The UI shows all kinds the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CityNotFound,
    WeatherUnavailable,
    NetworkOrParseFailure,
}

/// Failure of one fetch cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("City not found. Please try another city name.")]
    CityNotFound { city: String },

    #[error("Weather data not available for this location.")]
    WeatherUnavailable,

    #[error("Failed to reach the {endpoint} service: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("The {endpoint} request failed with status {status}: {detail}")]
    Status {
        endpoint: &'static str,
        status: u16,
        detail: String,
    },

    #[error("Failed to parse the {endpoint} response: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::CityNotFound { .. } => ErrorKind::CityNotFound,
            FetchError::WeatherUnavailable => ErrorKind::WeatherUnavailable,
            FetchError::Request { .. } | FetchError::Status { .. } | FetchError::Parse { .. } => {
                ErrorKind::NetworkOrParseFailure
            }
        }
    }
}
