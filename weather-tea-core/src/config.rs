use std::time::Duration;

use crate::error::WeatherError;

/// OpenWeatherMap API root; the client appends `/weather`.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Upper bound for one request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Name of the environment variable holding the API key.
pub const API_KEY_ENV: &str = "OWM_API_KEY";

/// Immutable settings for one client instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Pick the API key with precedence: explicit flag, then environment value.
    /// Empty strings count as absent.
    pub fn resolve(flag: Option<String>, env: Option<String>) -> Result<Self, WeatherError> {
        flag.into_iter()
            .chain(env)
            .find(|key| !key.trim().is_empty())
            .map(Self::new)
            .ok_or_else(WeatherError::missing_api_key)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the current-weather endpoint.
    pub fn current_weather_url(&self) -> String {
        format!("{}/weather", self.base_url)
    }
}
