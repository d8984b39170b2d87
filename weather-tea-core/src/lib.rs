//! Core library for the `weather-tea` CLI.
//!
//! This crate defines:
//! - Client configuration & credential resolution
//! - The OpenWeatherMap client behind the `WeatherProvider` trait
//! - Mapping of raw payloads into flat display records
//!
//! It is used by `weather-tea-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod provider;

pub use config::{API_KEY_ENV, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::WeatherError;
pub use model::{Units, WeatherRecord, WeatherRequest};
pub use provider::{WeatherProvider, current_weather, openweather::OpenWeatherClient};
