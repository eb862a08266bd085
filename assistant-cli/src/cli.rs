use anyhow::{Context, bail};
use assistant_core::{
    Assistant, CityInput, CityQuery, Config, ProviderId, ResolvedDate, http,
    provider::provider_from_config, resolve_day_month,
    suggestion::suggestion_provider_from_config,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::info;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-assistant",
    version,
    about = "Weather reports, travel comparisons and activity suggestions"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Weather provider to use instead of the configured default.
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Skip language-model suggestions (no Groq key needed).
    #[arg(long, global = true)]
    pub no_suggestions: bool,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials: "openweather", "weatherapi" or "groq".
    Configure {
        provider: String,

        /// Also make this weather provider the default.
        #[arg(long)]
        default: bool,
    },

    /// Show weather for one city.
    Show {
        city: String,

        /// Forecast day as DD-MM; if absent, means "now".
        #[arg(long)]
        date: Option<String>,
    },

    /// Compare two cities for a trip from ORIGIN to DESTINATION.
    Compare {
        origin: String,
        destination: String,

        /// Forecast day as DD-MM; if absent, compares current conditions.
        #[arg(long)]
        date: Option<String>,
    },

    /// Prompt for the city (or "cityA, cityB") and an optional date.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match &self.command {
            Some(Command::Configure { provider, default }) => configure(provider, *default),
            Some(Command::Show { city, date }) => {
                let config = Config::load()?;
                let assistant = self.build_assistant(&config)?;
                let date = resolve_optional(date.as_deref())?;
                show(&assistant, city, date).await
            }
            Some(Command::Compare { origin, destination, date }) => {
                let config = Config::load()?;
                let assistant = self.build_assistant(&config)?;
                let date = resolve_optional(date.as_deref())?;
                compare(&assistant, origin, destination, date).await
            }
            Some(Command::Interactive) | None => self.interactive().await,
        }
    }

    /// Fails before any prompt if credentials are missing.
    fn build_assistant(&self, config: &Config) -> anyhow::Result<Assistant> {
        let id = match self.provider.as_deref() {
            Some(name) => ProviderId::try_from(name)?,
            None => config.default_provider_id()?,
        };
        info!(provider = %id, "using weather provider");

        let client = http::client(config.request_timeout())?;
        let weather = provider_from_config(id, config, client.clone())?;
        let suggestions = if self.no_suggestions {
            None
        } else {
            Some(suggestion_provider_from_config(config, client)?)
        };

        Ok(Assistant::new(weather, suggestions))
    }

    async fn interactive(&self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let assistant = self.build_assistant(&config)?;

        output::banner();

        let city_input =
            Text::new("Enter city name (or two cities separated by comma for travel comparison):")
                .prompt()?;
        let input = CityInput::parse(&city_input, config.default_city())?;

        let date_message = match input {
            CityInput::Single(_) => "Optional date (DD-MM) for forecast, press Enter for today:",
            CityInput::Pair { .. } => {
                "Optional date (DD-MM) for forecast, press Enter for current comparison:"
            }
        };
        let date_input = Text::new(date_message).prompt()?;
        let date = resolve_optional(Some(&date_input))?;

        match input {
            CityInput::Single(city) => show(&assistant, &city, date).await,
            CityInput::Pair { origin, destination } => {
                compare(&assistant, &origin, &destination, date).await
            }
        }
    }
}

/// Empty or absent input means "now".
fn resolve_optional(input: Option<&str>) -> anyhow::Result<Option<ResolvedDate>> {
    resolve_against(input, Local::now().date_naive())
}

fn resolve_against(input: Option<&str>, today: NaiveDate) -> anyhow::Result<Option<ResolvedDate>> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => Ok(Some(resolve_day_month(s, today)?)),
        None => Ok(None),
    }
}

fn note_rollover(date: Option<ResolvedDate>) -> Option<NaiveDate> {
    if date.is_some_and(|d| d.rolled_over) {
        output::adjusted_year_note();
    }
    date.map(|d| d.date)
}

async fn show(assistant: &Assistant, city: &str, date: Option<ResolvedDate>) -> anyhow::Result<()> {
    let date = note_rollover(date);
    let query = match date {
        Some(date) => CityQuery::on(city, date),
        None => CityQuery::current(city),
    };

    let outcome = assistant.city(&query).await?;
    output::city(&outcome);
    Ok(())
}

async fn compare(
    assistant: &Assistant,
    origin: &str,
    destination: &str,
    date: Option<ResolvedDate>,
) -> anyhow::Result<()> {
    let date = note_rollover(date);
    let outcome = assistant.travel(origin, destination, date).await?;
    output::travel(&outcome);
    Ok(())
}

/// Prompt for an API key and store it in the config file.
///
/// Environment overrides are not applied here so they never end up on disk.
fn configure(target: &str, make_default: bool) -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;
    let provider = configure_target(target, make_default)?;

    let api_key = Password::new(&format!("API key for {target}:"))
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        bail!("API key must not be empty.");
    }

    match provider {
        Some(id) => {
            config.upsert_provider_api_key(id, api_key);
            if make_default {
                config.set_default_provider(id);
            }
        }
        None => config.suggestions.api_key = Some(api_key),
    }

    config
        .save_to(&path)
        .with_context(|| format!("Failed to save {target} credentials"))?;
    println!("Saved {target} credentials to {}", path.display());
    Ok(())
}

/// `None` is the Groq suggestion key; anything else must name a weather provider.
fn configure_target(target: &str, make_default: bool) -> anyhow::Result<Option<ProviderId>> {
    if target.eq_ignore_ascii_case("groq") {
        if make_default {
            bail!("--default applies to weather providers, not groq.");
        }
        return Ok(None);
    }
    Ok(Some(ProviderId::try_from(target)?))
}
