use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    Config,
    error::{AssistantError, Result},
    suggestion::groq::GroqSuggester,
};

pub mod groq;

/// A language model that turns one prompt into one free-text reply.
#[async_trait]
pub trait SuggestionProvider: Send + Sync + Debug {
    async fn suggest(&self, prompt: &str) -> Result<String>;
}

pub fn suggestion_provider_from_config(
    config: &Config,
    http: Client,
) -> Result<Box<dyn SuggestionProvider>> {
    let api_key = config.suggestion_api_key().ok_or(AssistantError::MissingCredential {
        what: "suggestions (Groq)",
        env_var: crate::config::GROQ_API_KEY_ENV,
        command: "groq",
    })?;

    Ok(Box::new(GroqSuggester::new(
        api_key.to_owned(),
        config.suggestion_model().to_owned(),
        config.suggestion_base_url().to_owned(),
        http,
    )))
}
