use thiserror::Error;

/// Everything that can go wrong while fetching and mapping current weather.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Missing credential or an invalid option value. Raised before any network call.
    #[error("{0}")]
    Configuration(String),

    /// Transport-level failure: connect, timeout, non-success status, unreadable body.
    #[error("Weather API request failed: {0}")]
    Api(String),

    /// A successful response lacked one of the fields the record needs.
    #[error("Weather API response is missing required field `{0}`")]
    MissingField(String),
}

impl WeatherError {
    pub fn missing_api_key() -> Self {
        WeatherError::Configuration(
            "API key required (use --api-key or OWM_API_KEY environment variable)".to_string(),
        )
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            format!("request timed out ({err})")
        } else {
            err.to_string()
        };
        WeatherError::Api(cause)
    }
}
