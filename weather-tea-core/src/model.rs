use serde::Serialize;
use serde_json::Number;
use std::{fmt, str::FromStr};

use crate::error::WeatherError;

/// Measurement system requested from the API. The service does the conversion;
/// locally it only picks the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature label shown next to values.
    pub fn label(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = WeatherError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(WeatherError::Configuration(format!(
                "Unknown unit system '{value}'. Supported: metric, imperial."
            ))),
        }
    }
}

/// Query parameters for one lookup.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    /// City name, optionally with a country suffix, e.g. "London,GB".
    pub city: String,
    pub units: Units,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>, units: Units) -> Self {
        Self { city: city.into(), units }
    }
}

/// Flat record handed to the presentation layer.
///
/// Numbers keep their JSON form, so `15.0` prints as `15.0` and `70` as `70`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    pub city: String,
    pub temp: Number,
    pub feels_like: Number,
    pub humidity: Number,
    pub description: String,
    pub units: String,
    pub wind_speed: Number,
    pub pressure: Number,
}
