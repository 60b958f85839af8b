//! Configuration file model and the load-once store.
//!
//! Provider selection is driven by configuration, not code: a single
//! `provider` selector names the active id, and one section per provider
//! carries its settings. Omitted fields take the per-provider defaults.
//!
//! ```yaml
//! provider: groq
//!
//! groq:
//!   api_key: ""
//!   base_url: https://api.groq.com/openai/v1
//!   model: llama-3.1-8b-instant
//!   temperature: 0.7
//!   max_tokens: 1024
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::provider::{ProviderConfig, ProviderId};

/// Failure to read or parse the configuration file.
///
/// Startup-surface only; once the store exists, nothing here can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One provider section of the config file. Every field is optional;
/// missing values fall back to [`ProviderConfig::defaults_for`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProviderSection {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default, alias = "maxOutputTokens")]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl ProviderSection {
    fn resolve(&self, id: ProviderId) -> ProviderConfig {
        let defaults = ProviderConfig::defaults_for(id);
        ProviderConfig {
            api_key: self.api_key.clone().unwrap_or(defaults.api_key),
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            model: self.model.clone().unwrap_or(defaults.model),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
        }
    }
}

/// Serde model of the whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Active provider selector. `None` means demo-only mode.
    #[serde(default)]
    pub provider: Option<ProviderId>,

    #[serde(default)]
    pub groq: Option<ProviderSection>,
    #[serde(default)]
    pub openai: Option<ProviderSection>,
    #[serde(default)]
    pub anthropic: Option<ProviderSection>,
    #[serde(default)]
    pub google: Option<ProviderSection>,
    #[serde(default)]
    pub together: Option<ProviderSection>,
}

impl AppConfig {
    /// The section for a given provider id, if present.
    pub fn section(&self, id: ProviderId) -> Option<&ProviderSection> {
        match id {
            ProviderId::Groq => self.groq.as_ref(),
            ProviderId::OpenAi => self.openai.as_ref(),
            ProviderId::Anthropic => self.anthropic.as_ref(),
            ProviderId::Google => self.google.as_ref(),
            ProviderId::Together => self.together.as_ref(),
        }
    }
}

/// Read-only view of the resolved configuration.
///
/// Loaded once at startup; the rest of the crate only ever reads the active
/// provider. A selector with no matching section is not a fatal error;
/// the store degrades to demo-only mode.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    active: Option<(ProviderId, ProviderConfig)>,
}

impl ConfigStore {
    /// Load and resolve the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: AppConfig = serde_yaml::from_str(&text)?;
        Ok(Self::from_app_config(&config))
    }

    /// Resolve a parsed [`AppConfig`] into a store.
    pub fn from_app_config(config: &AppConfig) -> Self {
        let Some(id) = config.provider else {
            debug!("no provider selected; demo replies only");
            return Self::demo_only();
        };

        match config.section(id) {
            Some(section) => Self {
                active: Some((id, section.resolve(id))),
            },
            None => {
                warn!(provider = %id, "selected provider has no config section; demo replies only");
                Self::demo_only()
            }
        }
    }

    /// A store with no live provider at all.
    pub fn demo_only() -> Self {
        Self { active: None }
    }

    /// A store with an explicit active provider, bypassing the file surface.
    pub fn with_active(id: ProviderId, config: ProviderConfig) -> Self {
        Self {
            active: Some((id, config)),
        }
    }

    /// The active provider and its settings, or `None` in demo-only mode.
    pub fn active(&self) -> Option<(ProviderId, &ProviderConfig)> {
        self.active.as_ref().map(|(id, config)| (*id, config))
    }

    pub fn active_id(&self) -> Option<ProviderId> {
        self.active.as_ref().map(|(id, _)| *id)
    }
}
