//! Text rendering of a [`RequestState`].

use chrono::NaiveDate;
use std::fmt::Write;

use crate::{
    codes::{WeatherIcon, description},
    config::{Measure, UnitDefaults},
    model::DisplayRecord,
    state::RequestState,
};

/// Render `state` for the terminal. `today` is the date shown under the place name.
pub fn render(state: &RequestState, units: &UnitDefaults, today: NaiveDate) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading { .. } => "⟳ Loading weather data...".to_string(),
        RequestState::Error(message) => format!("⚠ {message}"),
        RequestState::Ready(record) => render_record(record, units, today),
    }
}

pub fn render_record(record: &DisplayRecord, units: &UnitDefaults, today: NaiveDate) -> String {
    let current = &record.conditions;
    let unit = |measure| units.resolve(&record.units, measure);
    let icon = WeatherIcon::from_code(current.weather_code);

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", record.location_label());
    let _ = writeln!(out, "{}", format_date(today));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}{}",
        round_half_up(current.temperature_2m),
        unit(Measure::Temperature)
    );
    let _ = writeln!(out, "  {} {}", icon.glyph(), description(current.weather_code));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Feels Like     {}{}",
        round_half_up(current.apparent_temperature),
        unit(Measure::ApparentTemperature)
    );
    let _ = writeln!(
        out,
        "  Humidity       {}{}",
        current.relative_humidity_2m,
        unit(Measure::Humidity)
    );
    let _ = writeln!(
        out,
        "  Wind Speed     {}{} {}",
        current.wind_speed_10m,
        unit(Measure::WindSpeed),
        compass_point(current.wind_direction_10m)
    );
    let _ = write!(
        out,
        "  Precipitation  {}{}",
        current.precipitation,
        unit(Measure::Precipitation)
    );
    out
}

/// Long US-style date, e.g. "Saturday, October 17, 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// 8-point compass direction the wind blows from.
pub fn compass_point(degrees: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let sector = (degrees.rem_euclid(360.0) / 45.0).round() as usize % POINTS.len();
    POINTS[sector]
}
