use chrono::NaiveDate;
use tracing::info;

use crate::{
    display::{capitalize, decimal},
    error::Result,
    forecast::find_for_date,
    model::{CityQuery, WeatherSnapshot},
    prompt,
    provider::WeatherProvider,
};

/// Conditions for one city, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct CityReport {
    /// Provider-resolved name for current conditions, capitalized input otherwise.
    pub city: String,
    pub date: Option<NaiveDate>,
    pub snapshot: WeatherSnapshot,
}

impl CityReport {
    pub fn title(&self) -> String {
        match self.date {
            Some(date) => format!("Weather forecast for {} on {date}", self.city),
            None => format!("Weather summary for {}", self.city),
        }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        summary_lines(&self.snapshot)
    }

    /// Prompt asking for three activities grounded in this report.
    pub fn activity_prompt(&self) -> String {
        prompt::activities(&self.city, self.date, &self.snapshot)
    }
}

pub fn summary_lines(snapshot: &WeatherSnapshot) -> Vec<String> {
    vec![
        format!("Temperature: {}°C", decimal(snapshot.temperature_c)),
        format!("Humidity: {}%", snapshot.humidity_pct),
        format!("Wind speed: {} m/s", decimal(snapshot.wind_speed_mps)),
        format!("Conditions: {}", capitalize(&snapshot.description)),
    ]
}

/// Current conditions, or the forecast for `query.resolved_date`.
pub async fn report_city(provider: &dyn WeatherProvider, query: &CityQuery) -> Result<CityReport> {
    match query.resolved_date {
        None => {
            info!(city = %query.name, "fetching current conditions");
            let current = provider.current(&query.name).await?;
            Ok(CityReport {
                city: current.location,
                date: None,
                snapshot: current.snapshot,
            })
        }
        Some(date) => {
            info!(city = %query.name, %date, "fetching forecast");
            let feed = provider.forecast(&query.name).await?;
            let entry = find_for_date(&feed, date, provider.id().forecast_horizon_days())?;
            Ok(CityReport {
                city: capitalize(&query.name),
                date: Some(date),
                snapshot: entry.snapshot.clone(),
            })
        }
    }
}
