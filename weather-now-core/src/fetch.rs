use crate::{error::FetchError, model::DisplayRecord, provider::WeatherProvider};

/// Resolve `city` to a place, then fetch its current conditions.
///
/// `city` is expected to be trimmed and non-empty; see [`crate::Session::begin`].
pub async fn fetch_weather(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<DisplayRecord, FetchError> {
    let place = provider
        .search_place(city)
        .await?
        .ok_or_else(|| FetchError::CityNotFound { city: city.to_string() })?;

    tracing::info!(
        city,
        name = %place.name,
        country = %place.country,
        latitude = place.latitude,
        longitude = place.longitude,
        "resolved place"
    );

    let observation = provider
        .current_conditions(&place)
        .await?
        .ok_or(FetchError::WeatherUnavailable)?;

    Ok(DisplayRecord::new(place, observation))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        model::{CurrentConditions, Observation, Place, Units},
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned provider that counts calls.
    #[derive(Debug, Default)]
    pub(crate) struct FakeProvider {
        pub place: Option<Place>,
        pub observation: Option<Observation>,
        pub searches: AtomicUsize,
        pub forecasts: AtomicUsize,
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn search_place(&self, _city: &str) -> Result<Option<Place>, FetchError> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            Ok(self.place.clone())
        }

        async fn current_conditions(&self, _place: &Place) -> Result<Option<Observation>, FetchError> {
            self.forecasts.fetch_add(1, Ordering::SeqCst);
            Ok(self.observation.clone())
        }
    }

    pub(crate) fn london() -> Place {
        Place {
            name: "London".into(),
            country: "United Kingdom".into(),
            latitude: 51.5,
            longitude: -0.12,
        }
    }

    pub(crate) fn overcast() -> Observation {
        Observation {
            conditions: CurrentConditions {
                temperature_2m: 15.2,
                relative_humidity_2m: 72.0,
                apparent_temperature: 14.6,
                precipitation: 0.0,
                weather_code: 3,
                wind_speed_10m: 11.5,
                wind_direction_10m: 250.0,
            },
            units: Units::from([
                ("temperature_2m".to_string(), "°C".to_string()),
                ("wind_speed_10m".to_string(), "km/h".to_string()),
            ]),
        }
    }

    #[tokio::test]
    async fn merges_place_and_conditions() {
        let provider = FakeProvider {
            place: Some(london()),
            observation: Some(overcast()),
            ..Default::default()
        };

        let record = fetch_weather(&provider, "london").await.expect("record");

        assert_eq!(record.city, "London");
        assert_eq!(record.country, "United Kingdom");
        assert_eq!(record.conditions.temperature_2m, 15.2);
        assert_eq!(record.conditions.weather_code, 3);
        assert_eq!(record.units.get("wind_speed_10m").map(String::as_str), Some("km/h"));
    }

    #[tokio::test]
    async fn unknown_city_skips_forecast() {
        let provider = FakeProvider { observation: Some(overcast()), ..Default::default() };

        let err = fetch_weather(&provider, "Atlantis").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CityNotFound);
        assert_eq!(provider.searches.load(Ordering::SeqCst), 1);
        assert_eq!(provider.forecasts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_current_block_is_unavailable() {
        let provider = FakeProvider { place: Some(london()), ..Default::default() };

        let err = fetch_weather(&provider, "London").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::WeatherUnavailable);
        assert_eq!(provider.forecasts.load(Ordering::SeqCst), 1);
    }
}
