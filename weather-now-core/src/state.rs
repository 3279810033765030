//! Request lifecycle of the lookup UI.
//!
//! A [`Session`] owns the single [`RequestState`]. Each lookup is started with
//! [`Session::begin`], which hands out a [`Ticket`], and finished with
//! [`Session::complete`]. Only the most recently issued ticket may commit, so a
//! slow lookup that settles after a newer one never overwrites its result.

use crate::{error::FetchError, fetch::fetch_weather, model::DisplayRecord, provider::WeatherProvider};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        city: String,
    },
    Error(String),
    Ready(DisplayRecord),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    pub fn record(&self) -> Option<&DisplayRecord> {
        match self {
            RequestState::Ready(record) => Some(record),
            _ => None,
        }
    }
}

/// Handle for one in-flight lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    city: String,
}

impl Ticket {
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug, Default)]
pub struct Session {
    state: RequestState,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Enter `Loading` for `input`. Blank input is ignored and leaves state as is.
    pub fn begin(&mut self, input: &str) -> Option<Ticket> {
        let city = input.trim();
        if city.is_empty() {
            return None;
        }

        self.generation += 1;
        self.state = RequestState::Loading { city: city.to_string() };

        Some(Ticket { generation: self.generation, city: city.to_string() })
    }

    /// Commit the outcome of `ticket`. Returns `false` if a newer lookup has
    /// started since, in which case the outcome is dropped.
    pub fn complete(&mut self, ticket: Ticket, result: Result<DisplayRecord, FetchError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(city = %ticket.city, "discarding stale lookup");
            return false;
        }

        self.state = match result {
            Ok(record) => RequestState::Ready(record),
            Err(err) => {
                tracing::warn!(city = %ticket.city, kind = ?err.kind(), error = %err, "lookup failed");
                RequestState::Error(err.to_string())
            }
        };
        true
    }

    /// Run a whole lookup for `input`. Returns `false` if the input was blank.
    pub async fn submit(&mut self, provider: &dyn WeatherProvider, input: &str) -> bool {
        let Some(ticket) = self.begin(input) else {
            return false;
        };

        let result = fetch_weather(provider, ticket.city()).await;
        self.complete(ticket, result)
    }
}
