use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{ClientConfig, WeatherError, WeatherRequest};

use super::WeatherProvider;

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    config: ClientConfig,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WeatherError::Api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self, request), fields(city = %request.city, units = %request.units))]
    async fn fetch_current(&self, request: &WeatherRequest) -> Result<Value, WeatherError> {
        let url = self.config.current_weather_url();
        debug!(%url, timeout = ?self.config.timeout, "sending current weather request");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", request.city.as_str()),
                ("units", request.units.as_str()),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "current weather request failed"))?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, "current weather request rejected");
            return Err(WeatherError::Api(format!(
                "status {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| WeatherError::Api(format!("invalid JSON in response: {e}")))?;

        debug!("current weather payload received");
        Ok(payload)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
