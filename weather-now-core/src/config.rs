use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";

/// Base URLs of the two Open-Meteo services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub geocoding_url: String,
    pub forecast_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

/// A displayed quantity whose unit comes from the provider's `current_units`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Temperature,
    ApparentTemperature,
    Humidity,
    WindSpeed,
    Precipitation,
}

impl Measure {
    /// Wire name of the field, as used in `current` and `current_units`.
    pub fn field_name(&self) -> &'static str {
        match self {
            Measure::Temperature => "temperature_2m",
            Measure::ApparentTemperature => "apparent_temperature",
            Measure::Humidity => "relative_humidity_2m",
            Measure::WindSpeed => "wind_speed_10m",
            Measure::Precipitation => "precipitation",
        }
    }
}

/// Units used when the provider omits unit metadata for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitDefaults {
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub precipitation: String,
}

impl Default for UnitDefaults {
    fn default() -> Self {
        Self {
            temperature: "°C".to_string(),
            humidity: "%".to_string(),
            wind_speed: "km/h".to_string(),
            precipitation: "mm".to_string(),
        }
    }
}

impl UnitDefaults {
    pub fn fallback(&self, measure: Measure) -> &str {
        match measure {
            Measure::Temperature | Measure::ApparentTemperature => &self.temperature,
            Measure::Humidity => &self.humidity,
            Measure::WindSpeed => &self.wind_speed,
            Measure::Precipitation => &self.precipitation,
        }
    }

    /// Unit reported by the provider for `measure`, else the configured default.
    pub fn resolve<'a>(&'a self, units: &'a BTreeMap<String, String>, measure: Measure) -> &'a str {
        units
            .get(measure.field_name())
            .map(String::as_str)
            .filter(|unit| !unit.is_empty())
            .unwrap_or_else(|| self.fallback(measure))
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "London"
/// language = "en"
///
/// [endpoints]
/// geocoding_url = "https://geocoding-api.open-meteo.com"
///
/// [units]
/// temperature = "°C"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City fetched when the interactive search starts or `show` has no argument.
    pub default_city: String,

    /// Language of geocoding results.
    pub language: String,

    /// Overall HTTP request timeout. Unset means the client default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    pub endpoints: Endpoints,

    pub units: UnitDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: "London".to_string(),
            language: "en".to_string(),
            timeout_secs: None,
            endpoints: Endpoints::default(),
            units: UnitDefaults::default(),
        }
    }
}

impl Config {
    /// Load config from the platform path, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform path, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-now", "weather-now")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replace the default city, ignoring blank input.
    pub fn set_default_city(&mut self, city: &str) -> bool {
        let city = city.trim();
        if city.is_empty() {
            return false;
        }
        self.default_city = city.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_open_meteo() {
        let cfg = Config::default();

        assert_eq!(cfg.default_city, "London");
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.timeout_secs, None);
        assert_eq!(cfg.endpoints.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.endpoints.forecast_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            default_city = "Oslo"

            [units]
            temperature = "K"
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.default_city, "Oslo");
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.units.temperature, "K");
        assert_eq!(cfg.units.wind_speed, "km/h");
        assert_eq!(cfg.endpoints, Endpoints::default());
    }

    #[test]
    fn save_then_load_returns_same_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_default_city("  Paris ");
        cfg.timeout_secs = Some(5);
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.default_city, "Paris");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = Config::load_from(&dir.path().join("absent.toml")).expect("load");

        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_city = [").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn blank_default_city_is_ignored() {
        let mut cfg = Config::default();

        assert!(!cfg.set_default_city("   "));
        assert_eq!(cfg.default_city, "London");
    }

    #[test]
    fn provider_units_win_over_defaults() {
        let defaults = UnitDefaults::default();
        let mut units = BTreeMap::new();
        units.insert("temperature_2m".to_string(), "°F".to_string());
        units.insert("wind_speed_10m".to_string(), String::new());

        assert_eq!(defaults.resolve(&units, Measure::Temperature), "°F");
        assert_eq!(defaults.resolve(&units, Measure::ApparentTemperature), "°C");
        assert_eq!(defaults.resolve(&units, Measure::WindSpeed), "km/h");
        assert_eq!(defaults.resolve(&units, Measure::Humidity), "%");
        assert_eq!(defaults.resolve(&units, Measure::Precipitation), "mm");
    }
}
