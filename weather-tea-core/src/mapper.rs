//! Maps a raw OpenWeatherMap payload onto a [`WeatherRecord`].

use serde_json::{Number, Value};

use crate::{
    error::WeatherError,
    model::{Units, WeatherRecord},
};

/// Used when the payload carries no `name`.
pub const UNKNOWN_CITY: &str = "N/A";

/// Extract the display record from a current-weather payload.
///
/// Only `name` has a fallback; every other path is required and produces
/// [`WeatherError::MissingField`] when absent or not of the expected type.
pub fn parse(payload: &Value, units: Units) -> Result<WeatherRecord, WeatherError> {
    let city = payload
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_CITY)
        .to_string();

    let description = payload
        .pointer("/weather/0/description")
        .and_then(Value::as_str)
        .ok_or_else(|| WeatherError::MissingField("weather[0].description".into()))?;

    Ok(WeatherRecord {
        city,
        temp: number(payload, "main.temp")?,
        feels_like: number(payload, "main.feels_like")?,
        humidity: number(payload, "main.humidity")?,
        description: capitalize_first(description),
        units: units.label().to_string(),
        wind_speed: number(payload, "wind.speed")?,
        pressure: number(payload, "main.pressure")?,
    })
}

/// Numbers are kept as received so they print the way the API sent them.
fn number(payload: &Value, path: &str) -> Result<Number, WeatherError> {
    let pointer = format!("/{}", path.replace('.', "/"));
    payload
        .pointer(&pointer)
        .and_then(Value::as_number)
        .cloned()
        .ok_or_else(|| WeatherError::MissingField(path.to_string()))
}

/// Uppercase the first character, leave the rest as is.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
