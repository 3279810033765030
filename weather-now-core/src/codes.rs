//! WMO weather code → icon category and description.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::Serialize;

/// Icon category for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    HeavyRainShowers,
    Thunderstorm,
    /// Anything not covered by a range above.
    Cloud,
}

impl WeatherIcon {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45..=48 => Self::Fog,
            51..=67 => Self::Rain,
            71..=77 => Self::Snow,
            80..=82 => Self::HeavyRainShowers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Cloud,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clear => "sun",
            Self::PartlyCloudy => "cloud-sun",
            Self::Fog => "smog",
            Self::Rain => "cloud-rain",
            Self::Snow => "snowflake",
            Self::HeavyRainShowers => "cloud-showers-heavy",
            Self::Thunderstorm => "bolt",
            Self::Cloud => "cloud",
        }
    }

    /// Terminal glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::HeavyRainShowers => "🌦️",
            Self::Thunderstorm => "⛈️",
            Self::Cloud => "☁️",
        }
    }
}

/// Human description of a weather code; exact match only.
pub fn description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}
