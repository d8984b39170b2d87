use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::{WeatherError, WeatherRecord, WeatherRequest, mapper};

pub mod openweather;

/// Source of raw current-weather payloads.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Perform exactly one request. The payload is returned as received.
    async fn fetch_current(&self, request: &WeatherRequest) -> Result<Value, WeatherError>;
}

/// Fetch the payload for `request` and map it into a record.
pub async fn current_weather(
    provider: &dyn WeatherProvider,
    request: &WeatherRequest,
) -> Result<WeatherRecord, WeatherError> {
    let payload = provider.fetch_current(request).await?;
    mapper::parse(&payload, request.units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Units;
    use serde_json::json;

    #[derive(Debug)]
    struct Canned(Result<Value, String>);

    #[async_trait]
    impl WeatherProvider for Canned {
        async fn fetch_current(&self, _request: &WeatherRequest) -> Result<Value, WeatherError> {
            self.0.clone().map_err(WeatherError::Api)
        }
    }

    #[tokio::test]
    async fn current_weather_maps_payload() {
        let provider = Canned(Ok(json!({
            "name": "Paris",
            "main": { "temp": 68.5, "feels_like": 67.0, "humidity": 40, "pressure": 1020 },
            "weather": [{ "description": "few clouds" }],
            "wind": { "speed": 5.2 }
        })));

        let request = WeatherRequest::new("Paris,FR", Units::Imperial);
        let record = current_weather(&provider, &request).await.expect("should map");

        assert_eq!(record.city, "Paris");
        assert_eq!(record.units, "°F");
        assert_eq!(record.description, "Few clouds");
    }

    #[tokio::test]
    async fn current_weather_passes_api_error_through() {
        let provider = Canned(Err("connection refused".into()));
        let request = WeatherRequest::new("Paris", Units::Metric);

        let err = current_weather(&provider, &request).await.unwrap_err();
        assert!(matches!(err, WeatherError::Api(_)));
    }

    #[tokio::test]
    async fn current_weather_reports_incomplete_payload() {
        let provider = Canned(Ok(json!({ "name": "Paris" })));
        let request = WeatherRequest::new("Paris", Units::Metric);

        let err = current_weather(&provider, &request).await.unwrap_err();
        assert!(matches!(err, WeatherError::MissingField(_)));
    }
}
