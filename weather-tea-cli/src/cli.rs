use std::time::Duration;

use clap::{
    Parser,
    builder::{NonEmptyStringValueParser, PossibleValuesParser, TypedValueParser},
};
use tracing::info;
use weather_tea_core::{
    ClientConfig, DEFAULT_TIMEOUT, OpenWeatherClient, Units, WeatherError, WeatherProvider,
    WeatherRequest, current_weather,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-tea",
    version,
    about = "Weather-Tea - Command Line Weather Interface"
)]
pub struct Cli {
    /// City name, optionally with a country code (e.g. "London,GB").
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub city: String,

    /// OpenWeatherMap API key; falls back to OWM_API_KEY.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Measurement system.
    #[arg(
        long,
        default_value_t = Units::Metric,
        value_parser = PossibleValuesParser::new(["metric", "imperial"])
            .try_map(|s| s.parse::<Units>())
    )]
    pub units: Units,

    /// Show detailed weather information.
    #[arg(long)]
    pub full: bool,

    /// Request timeout in seconds.
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

/// Builds the real provider once the configuration is known.
pub fn connect_openweather(config: ClientConfig) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    Ok(Box::new(OpenWeatherClient::new(config)?))
}

impl Cli {
    /// Resolve the client configuration. `env_key` is the value of `OWM_API_KEY`, if set.
    pub fn client_config(&self, env_key: Option<String>) -> Result<ClientConfig, WeatherError> {
        let config = ClientConfig::resolve(self.api_key.clone(), env_key)?;
        Ok(config.with_timeout(Duration::from_secs(self.timeout)))
    }

    /// Run one lookup and return the text to print.
    pub async fn run<F>(self, env_key: Option<String>, connect: F) -> anyhow::Result<String>
    where
        F: FnOnce(ClientConfig) -> Result<Box<dyn WeatherProvider>, WeatherError>,
    {
        let config = self.client_config(env_key)?;
        let provider = connect(config)?;

        let request = WeatherRequest::new(self.city, self.units);
        info!(city = %request.city, units = %request.units, "looking up current weather");

        let record = current_weather(provider.as_ref(), &request).await?;

        Ok(output::render(&record, self.full))
    }
}
