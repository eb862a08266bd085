use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    display::round1,
    error::{AssistantError, Result},
    http::{send_for_text, truncate_body},
    model::{CurrentConditions, ForecastEntry, ForecastFeed, WeatherSnapshot},
};

use super::{ProviderId, WeatherProvider};

const SERVICE: &str = "WeatherAPI.com";
const CURRENT_URL: &str = "https://api.weatherapi.com/v1/current.json";
const FORECAST_URL: &str = "https://api.weatherapi.com/v1/forecast.json";

/// Local wall-clock time of an hourly slot, e.g. `2024-06-01 09:00`.
const HOUR_FORMAT: &str = "%Y-%m-%d %H:%M";

/// WeatherAPI.com error code for "No matching location found".
const NO_LOCATION_FOUND: u32 = 1006;

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, http: Client) -> Self {
        Self { api_key, http }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::WeatherApi
    }

    async fn current(&self, city: &str) -> Result<CurrentConditions> {
        debug!(city, "requesting WeatherAPI current");
        let request = self
            .http
            .get(CURRENT_URL)
            .query(&[("key", self.api_key.as_str()), ("q", city)]);

        let (status, body) = send_for_text(SERVICE, request).await?;
        parse_current(city, status, &body)
    }

    async fn forecast(&self, city: &str) -> Result<ForecastFeed> {
        debug!(city, "requesting WeatherAPI forecast");
        let days = ProviderId::WeatherApi.forecast_horizon_days().to_string();
        let request = self.http.get(FORECAST_URL).query(&[
            ("key", self.api_key.as_str()),
            ("q", city),
            ("days", days.as_str()),
        ]);

        let (status, body) = send_for_text(SERVICE, request).await?;
        parse_forecast(city, status, &body)
    }
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaError,
}

#[derive(Debug, Deserialize)]
struct WaError {
    code: u32,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    /// City-local, so slots fall on the same day as their `forecastday`.
    time: String,
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    hour: Vec<WaForecastHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    forecast: WaForecast,
}

/// Errors arrive as `{"error": {"code": .., "message": ..}}`, usually with a
/// 4xx status.
fn check_error(city: &str, http_status: StatusCode, body: &str) -> Result<()> {
    if let Ok(WaErrorBody { error }) = serde_json::from_str::<WaErrorBody>(body) {
        if error.code == NO_LOCATION_FOUND {
            return Err(AssistantError::CityNotFound { city: city.to_string() });
        }
        warn!(
            city,
            code = error.code,
            message = %error.message,
            "WeatherAPI reported an error"
        );
        return Err(AssistantError::upstream(
            SERVICE,
            format!("request failed with code {}: {}", error.code, error.message),
        ));
    }

    if !http_status.is_success() {
        return Err(AssistantError::upstream(
            SERVICE,
            format!("request failed with status {http_status}: {}", truncate_body(body)),
        ));
    }

    Ok(())
}

/// km/h to m/s, rounded the way the report displays it.
fn kph_to_mps(kph: f64) -> f64 {
    round1(kph / 3.6)
}

fn parse_current(city: &str, http_status: StatusCode, body: &str) -> Result<CurrentConditions> {
    check_error(city, http_status, body)?;

    let parsed: WaResponse = serde_json::from_str(body).map_err(|e| {
        AssistantError::upstream(SERVICE, format!("failed to parse current JSON: {e}"))
    })?;

    Ok(CurrentConditions {
        location: parsed.location.name,
        snapshot: WeatherSnapshot {
            temperature_c: parsed.current.temp_c,
            humidity_pct: parsed.current.humidity,
            wind_speed_mps: kph_to_mps(parsed.current.wind_kph),
            description: parsed.current.condition.text,
        },
    })
}

fn parse_forecast(city: &str, http_status: StatusCode, body: &str) -> Result<ForecastFeed> {
    check_error(city, http_status, body)?;

    let parsed: WaForecastResponse = serde_json::from_str(body).map_err(|e| {
        AssistantError::upstream(SERVICE, format!("failed to parse forecast JSON: {e}"))
    })?;

    let entries = parsed
        .forecast
        .forecastday
        .into_iter()
        .flat_map(|day| day.hour)
        .map(|hour| {
            Ok(ForecastEntry {
                timestamp: parse_local_hour(&hour.time)?,
                snapshot: WeatherSnapshot {
                    temperature_c: hour.temp_c,
                    humidity_pct: hour.humidity,
                    wind_speed_mps: kph_to_mps(hour.wind_kph),
                    description: hour.condition.text,
                },
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(city, slots = entries.len(), "parsed WeatherAPI forecast");

    Ok(ForecastFeed { city: parsed.location.name, entries })
}

fn parse_local_hour(time: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(time, HOUR_FORMAT).map_err(|e| {
        AssistantError::upstream(SERVICE, format!("invalid forecast time '{time}': {e}"))
    })
}
