use chrono::NaiveDate;
use thiserror::Error;

/// Every way a run of the assistant can fail.
///
/// None of these are retried: the CLI prints the message and exits.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Invalid date '{input}'. Please use DD-MM (e.g., 23-10).")]
    InvalidDate { input: String },

    #[error("{0}")]
    InvalidCityInput(String),

    #[error("City '{city}' not found. Please check the spelling and try again.")]
    CityNotFound { city: String },

    #[error(
        "No forecast found for {city} on {date}. \
         Please check the range (max {horizon_days} days ahead)."
    )]
    ForecastUnavailable {
        city: String,
        date: NaiveDate,
        horizon_days: u32,
    },

    #[error("{service} is unavailable: {reason}")]
    UpstreamUnavailable {
        service: &'static str,
        reason: String,
    },

    #[error(
        "No API key configured for {what}.\n\
         Hint: set {env_var} or run `weather-assistant configure {command}`."
    )]
    MissingCredential {
        what: &'static str,
        env_var: &'static str,
        command: &'static str,
    },
}

impl AssistantError {
    pub fn upstream(service: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::UpstreamUnavailable {
            service,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = AssistantError> = std::result::Result<T, E>;
