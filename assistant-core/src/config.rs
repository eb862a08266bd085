use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

use crate::provider::ProviderId;

pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const PROVIDER_ENV: &str = "WEATHER_ASSISTANT_PROVIDER";

const DEFAULT_CITY: &str = "Zagreb";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a single weather provider (e.g., API key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Language-model settings.
///
/// Example TOML:
/// [suggestions]
/// api_key = "gsk_..."
/// model = "llama-3.1-8b-instant"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuggestionConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default provider id, e.g. "openweather" or "weatherapi".
    pub default_provider: Option<String>,

    /// City used when the interactive prompt is left empty.
    pub default_city: Option<String>,

    pub request_timeout_secs: Option<u64>,

    /// Example TOML:
    /// [providers.openweather]
    /// api_key = "..."
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

impl Config {
    /// Return the weather provider to use.
    ///
    /// Falls back to the first provider with an API key when no default is set.
    pub fn default_provider_id(&self) -> Result<ProviderId> {
        if let Some(s) = self.default_provider.as_deref() {
            return ProviderId::try_from(s);
        }

        ProviderId::all()
            .iter()
            .copied()
            .find(|id| self.is_provider_configured(*id))
            .ok_or_else(|| {
                anyhow!(
                    "No default provider configured.\n\
                     Hint: run `weather-assistant configure <provider>` \
                     (e.g. `weather-assistant configure openweather`) \
                     or set OPENWEATHER_API_KEY."
                )
            })
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    /// Load config from disk and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let cfg = Self::load_from(&path)?;
        Ok(cfg.with_env_overrides(|name| std::env::var(name).ok()))
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-assistant", "weather-assistant")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply API keys and provider selection from the environment.
    ///
    /// `lookup` is `std::env::var` in production; empty values are ignored.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        for id in ProviderId::all() {
            if let Some(key) = var(id.api_key_env()) {
                self.providers
                    .insert(id.as_str().to_string(), ProviderConfig { api_key: key });
            }
        }
        if let Some(key) = var(GROQ_API_KEY_ENV) {
            self.suggestions.api_key = Some(key);
        }
        if let Some(provider) = var(PROVIDER_ENV) {
            self.default_provider = Some(provider);
        }

        self
    }

    /// Convenience helper: set/replace a provider API key and optionally set default provider.
    pub fn upsert_provider_api_key(&mut self, provider_id: ProviderId, api_key: String) {
        self.providers.insert(provider_id.as_str().to_string(), ProviderConfig { api_key });

        if self.default_provider.is_none() {
            self.default_provider = Some(provider_id.to_string());
        }
    }

    /// Returns API key for a provider, if present.
    pub fn provider_api_key(&self, provider_id: ProviderId) -> Option<&str> {
        self.providers.get(provider_id.as_str()).map(|cfg| cfg.api_key.as_str())
    }

    pub fn is_provider_configured(&self, provider_id: ProviderId) -> bool {
        self.provider_api_key(provider_id).is_some()
    }

    pub fn suggestion_api_key(&self) -> Option<&str> {
        self.suggestions.api_key.as_deref()
    }

    pub fn suggestion_model(&self) -> &str {
        self.suggestions.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn suggestion_base_url(&self) -> &str {
        self.suggestions.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn default_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderId;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| vars.iter().find(|(k, _)| *k == name).map(|(_, v)| v.to_string())
    }

    #[test]
    fn default_provider_id_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.default_provider_id().unwrap_err();

        assert!(err.to_string().contains("No default provider configured"));
    }

    #[test]
    fn set_api_key_and_default_for_provider() {
        let mut cfg = Config::default();

        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".into());

        let default = cfg.default_provider_id().expect("default provider must exist");
        assert_eq!(default, ProviderId::OpenWeather);

        let key = cfg.provider_api_key(ProviderId::OpenWeather);
        assert_eq!(key, Some("OPEN_KEY"));
        assert!(cfg.is_provider_configured(ProviderId::OpenWeather));
    }

    #[test]
    fn upsert_does_not_override_existing_default() {
        let mut cfg = Config::default();

        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".into());
        cfg.upsert_provider_api_key(ProviderId::WeatherApi, "WEATHER_KEY".into());

        let default = cfg.default_provider_id().expect("default provider must exist");

        assert_eq!(default, ProviderId::OpenWeather);
        assert!(cfg.is_provider_configured(ProviderId::OpenWeather));
        assert!(cfg.is_provider_configured(ProviderId::WeatherApi));
    }

    #[test]
    fn set_default_provider_overrides_default() {
        let mut cfg = Config::default();

        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".into());
        cfg.upsert_provider_api_key(ProviderId::WeatherApi, "WEATHER_KEY".into());
        cfg.set_default_provider(ProviderId::WeatherApi);

        let default = cfg.default_provider_id().expect("default provider must exist");
        assert_eq!(default, ProviderId::WeatherApi);
    }

    #[test]
    fn env_key_makes_provider_available_without_default() {
        let cfg = Config::default().with_env_overrides(env(&[("WEATHERAPI_API_KEY", "wa-key")]));

        assert_eq!(cfg.default_provider_id().unwrap(), ProviderId::WeatherApi);
        assert_eq!(cfg.provider_api_key(ProviderId::WeatherApi), Some("wa-key"));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = Config::default();
        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "from-file".into());

        let cfg = cfg.with_env_overrides(env(&[
            ("OPENWEATHER_API_KEY", "from-env"),
            ("GROQ_API_KEY", "gsk"),
            ("WEATHER_ASSISTANT_PROVIDER", "weatherapi"),
            ("WEATHERAPI_API_KEY", "   "),
        ]));

        assert_eq!(cfg.provider_api_key(ProviderId::OpenWeather), Some("from-env"));
        assert_eq!(cfg.suggestion_api_key(), Some("gsk"));
        assert_eq!(cfg.default_provider_id().unwrap(), ProviderId::WeatherApi);
        assert!(!cfg.is_provider_configured(ProviderId::WeatherApi));
    }

    #[test]
    fn defaults_for_optional_settings() {
        let cfg = Config::default();
        assert_eq!(cfg.default_city(), "Zagreb");
        assert_eq!(cfg.suggestion_model(), "llama-3.1-8b-instant");
        assert_eq!(cfg.suggestion_base_url(), "https://api.groq.com/openai/v1");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn missing_file_loads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(cfg.providers.is_empty());
        assert!(cfg.default_provider.is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".into());
        cfg.suggestions.api_key = Some("gsk".into());
        cfg.default_city = Some("Split".into());
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_provider_id().unwrap(), ProviderId::OpenWeather);
        assert_eq!(loaded.provider_api_key(ProviderId::OpenWeather), Some("OPEN_KEY"));
        assert_eq!(loaded.suggestion_api_key(), Some("gsk"));
        assert_eq!(loaded.default_city(), "Split");
    }

    #[test]
    fn parses_minimal_toml() {
        let cfg: Config = toml::from_str(
            r#"
            default_provider = "openweather"

            [providers.openweather]
            api_key = "abc"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.provider_api_key(ProviderId::OpenWeather), Some("abc"));
        assert!(cfg.suggestion_api_key().is_none());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_provider = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
