//! Core library for the `weather-assistant` CLI.
//!
//! This crate defines:
//! - Date resolution and date-aware forecast lookup
//! - Single-city reports and two-city travel comparisons
//! - Abstractions over weather and suggestion (language-model) providers
//! - Configuration & credentials handling
//!
//! It is used by `assistant-cli`, but can also be reused by other binaries or services.

pub mod assistant;
pub mod compare;
pub mod config;
pub mod date;
pub mod display;
pub mod error;
pub mod forecast;
pub mod http;
pub mod input;
pub mod model;
pub mod outlook;
pub mod prompt;
pub mod provider;
pub mod report;
pub mod suggestion;

pub use assistant::{Assistant, CityOutcome, TravelOutcome};
pub use compare::TravelPlan;
pub use config::Config;
pub use date::{ResolvedDate, resolve_day_month};
pub use error::AssistantError;
pub use input::CityInput;
pub use model::{CityQuery, ComparisonResult, DailyOutlookEntry, WeatherSnapshot};
pub use provider::{ProviderId, WeatherProvider};
pub use report::CityReport;
pub use suggestion::SuggestionProvider;
