use crate::{
    Config,
    error::{AssistantError, Result},
    model::{CurrentConditions, ForecastFeed},
    provider::{openweather::OpenWeatherProvider, weatherapi::WeatherApiProvider},
};
use async_trait::async_trait;
use reqwest::Client;
use std::{convert::TryFrom, fmt::Debug};

pub mod openweather;
pub mod weatherapi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
    WeatherApi,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweather",
            ProviderId::WeatherApi => "weatherapi",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeather, ProviderId::WeatherApi]
    }

    /// Environment variable that overrides the configured API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "OPENWEATHER_API_KEY",
            ProviderId::WeatherApi => "WEATHERAPI_API_KEY",
        }
    }

    /// How many days ahead the provider's free forecast reaches.
    pub fn forecast_horizon_days(&self) -> u32 {
        match self {
            ProviderId::OpenWeather => 5,
            ProviderId::WeatherApi => 3,
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "openweather" => Ok(ProviderId::OpenWeather),
            "weatherapi" => Ok(ProviderId::WeatherApi),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: openweather, weatherapi."
            )),
        }
    }
}

/// A source of current conditions and multi-day forecast feeds.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    /// Current conditions. Unknown cities fail with `CityNotFound`.
    async fn current(&self, city: &str) -> Result<CurrentConditions>;

    /// Chronological forecast slots covering the provider's horizon.
    async fn forecast(&self, city: &str) -> Result<ForecastFeed>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
    http: Client,
) -> Result<Box<dyn WeatherProvider>> {
    let api_key = config.provider_api_key(id).ok_or(AssistantError::MissingCredential {
        what: match id {
            ProviderId::OpenWeather => "weather provider 'openweather'",
            ProviderId::WeatherApi => "weather provider 'weatherapi'",
        },
        env_var: id.api_key_env(),
        command: id.as_str(),
    })?;

    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::OpenWeather => Box::new(OpenWeatherProvider::new(api_key.to_owned(), http)),
        ProviderId::WeatherApi => Box::new(WeatherApiProvider::new(api_key.to_owned(), http)),
    };

    Ok(boxed)
}
