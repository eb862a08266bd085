use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::{AssistantError, Result},
    http::{send_for_text, truncate_body},
    model::{CurrentConditions, ForecastEntry, ForecastFeed, WeatherSnapshot},
};

use super::{ProviderId, WeatherProvider};

const SERVICE: &str = "OpenWeather";
const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, http: Client) -> Self {
        Self { api_key, http }
    }

    async fn fetch(&self, url: &str, city: &str) -> Result<(StatusCode, String)> {
        debug!(url, city, "requesting OpenWeather");

        let request = self.http.get(url).query(&[
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
            ("lang", "en"),
        ]);

        send_for_text(SERVICE, request).await
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenWeather
    }

    async fn current(&self, city: &str) -> Result<CurrentConditions> {
        let (status, body) = self.fetch(CURRENT_URL, city).await?;
        parse_current(city, status, &body)
    }

    async fn forecast(&self, city: &str) -> Result<ForecastFeed> {
        let (status, body) = self.fetch(FORECAST_URL, city).await?;
        parse_forecast(city, status, &body)
    }
}

/// OpenWeather reports failures through `cod`, which is a number on the
/// current endpoint and a string on the forecast endpoint.
#[derive(Debug, Deserialize)]
struct OwStatus {
    cod: Option<Value>,
    message: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn status_code(cod: &Value) -> Option<u64> {
    match cod {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn check_status(city: &str, http_status: StatusCode, body: &str) -> Result<()> {
    let parsed: OwStatus = serde_json::from_str(body).map_err(|_| {
        AssistantError::upstream(
            SERVICE,
            format!("unexpected response (HTTP {http_status}): {}", truncate_body(body)),
        )
    })?;

    let code = parsed.cod.as_ref().and_then(status_code);
    match code {
        Some(200) => Ok(()),
        Some(404) => Err(AssistantError::CityNotFound { city: city.to_string() }),
        _ => {
            let message = parsed
                .message
                .map(|m| m.as_str().map(str::to_owned).unwrap_or_else(|| m.to_string()))
                .unwrap_or_else(|| truncate_body(body));
            warn!(city, ?code, %message, "OpenWeather reported an error");
            let code = code.map_or_else(|| "unknown".to_string(), |c| c.to_string());
            Err(AssistantError::upstream(
                SERVICE,
                format!("request failed with code {code}: {message}"),
            ))
        }
    }
}

fn description(weather: &[OwWeather]) -> String {
    weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

fn snapshot(main: &OwMain, wind: &OwWind, weather: &[OwWeather]) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_c: main.temp,
        humidity_pct: main.humidity,
        wind_speed_mps: wind.speed,
        description: description(weather),
    }
}

fn parse_current(city: &str, http_status: StatusCode, body: &str) -> Result<CurrentConditions> {
    check_status(city, http_status, body)?;

    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(|e| {
        AssistantError::upstream(SERVICE, format!("failed to parse current weather JSON: {e}"))
    })?;

    Ok(CurrentConditions {
        snapshot: snapshot(&parsed.main, &parsed.wind, &parsed.weather),
        location: parsed.name,
    })
}

fn parse_forecast(city: &str, http_status: StatusCode, body: &str) -> Result<ForecastFeed> {
    check_status(city, http_status, body)?;

    let parsed: OwForecastResponse = serde_json::from_str(body).map_err(|e| {
        AssistantError::upstream(SERVICE, format!("failed to parse forecast JSON: {e}"))
    })?;

    let entries = parsed
        .list
        .iter()
        .map(|entry| {
            Ok(ForecastEntry {
                timestamp: unix_to_naive_utc(entry.dt)?,
                snapshot: snapshot(&entry.main, &entry.wind, &entry.weather),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(city, slots = entries.len(), "parsed OpenWeather forecast");

    Ok(ForecastFeed { city: parsed.city.name, entries })
}

fn unix_to_naive_utc(ts: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| {
            AssistantError::upstream(SERVICE, format!("invalid forecast timestamp {ts}"))
        })
}
