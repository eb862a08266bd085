use chrono::{NaiveDate, NaiveDateTime};

/// Conditions at one point in time, in metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub description: String,
}

/// A city and, for forecast mode, the day the user asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery {
    pub name: String,
    pub resolved_date: Option<NaiveDate>,
}

impl CityQuery {
    pub fn current(name: impl Into<String>) -> Self {
        Self { name: name.into(), resolved_date: None }
    }

    pub fn on(name: impl Into<String>, date: NaiveDate) -> Self {
        Self { name: name.into(), resolved_date: Some(date) }
    }
}

/// Current conditions together with the location name the provider resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub location: String,
    pub snapshot: WeatherSnapshot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Slot time as the provider dates it: UTC for OpenWeather (`dt_txt`),
    /// city-local for WeatherAPI.com (`time`).
    pub timestamp: NaiveDateTime,
    pub snapshot: WeatherSnapshot,
}

impl ForecastEntry {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Chronologically ordered forecast slots for one city.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastFeed {
    pub city: String,
    pub entries: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub city_a: WeatherSnapshot,
    pub city_b: WeatherSnapshot,
    /// `city_b - city_a`, rounded to one decimal.
    pub temperature_delta: f64,
    /// `city_b - city_a`, exact.
    pub humidity_delta: i16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutlookEntry {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub description: String,
}
