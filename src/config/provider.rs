use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Well-known provider identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Groq,
    OpenAi,
    Anthropic,
    Google,
    Together,
}

/// The wire-protocol family a provider speaks.
///
/// A closed set: the dispatch layer matches over it exhaustively, so a new
/// provider id cannot be added without naming the adapter that serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFamily {
    OpenAiCompatible,
    Anthropic,
    Google,
}

impl ProviderId {
    pub const ALL: [ProviderId; 5] = [
        ProviderId::Groq,
        ProviderId::OpenAi,
        ProviderId::Anthropic,
        ProviderId::Google,
        ProviderId::Together,
    ];

    /// Stable lowercase identifier, matching the config file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Groq => "groq",
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Google => "google",
            ProviderId::Together => "together",
        }
    }

    /// The wire family this id is served by.
    pub fn family(self) -> ProviderFamily {
        match self {
            ProviderId::Groq | ProviderId::OpenAi | ProviderId::Together => {
                ProviderFamily::OpenAiCompatible
            }
            ProviderId::Anthropic => ProviderFamily::Anthropic,
            ProviderId::Google => ProviderFamily::Google,
        }
    }

    /// Human-readable provider name for user-facing text.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderId::Groq => "Groq",
            ProviderId::OpenAi => "OpenAI",
            ProviderId::Anthropic => "Anthropic",
            ProviderId::Google => "Google Gemini",
            ProviderId::Together => "Together AI",
        }
    }

    /// Where to obtain a credential for this provider.
    pub fn key_hint(self) -> &'static str {
        match self {
            ProviderId::Groq => "Get a free key at https://console.groq.com/keys",
            ProviderId::OpenAi => "Get a key at https://platform.openai.com/api-keys",
            ProviderId::Anthropic => "Get a key at https://console.anthropic.com/",
            ProviderId::Google => "Get a free key at https://makersuite.google.com/app/apikey",
            ProviderId::Together => "Get a key at https://api.together.xyz/",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static settings for one provider. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Credential; the empty string means "not configured".
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Request deadline. On expiry the call fails like any other
    /// transport error and the demo fallback applies.
    pub timeout_ms: u64,
}

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

impl ProviderConfig {
    /// Default endpoint, model, and generation parameters for a provider.
    pub fn defaults_for(id: ProviderId) -> Self {
        let (base_url, model, max_tokens) = match id {
            ProviderId::Groq => (
                "https://api.groq.com/openai/v1",
                "llama-3.1-8b-instant",
                1024,
            ),
            ProviderId::OpenAi => ("https://api.openai.com/v1", "gpt-3.5-turbo", 1000),
            ProviderId::Anthropic => (
                "https://api.anthropic.com/v1",
                "claude-3-haiku-20240307",
                1024,
            ),
            ProviderId::Google => (
                "https://generativelanguage.googleapis.com/v1",
                "gemini-pro",
                1024,
            ),
            ProviderId::Together => (
                "https://api.together.xyz/v1",
                "meta-llama/Llama-3-8b-chat-hf",
                1024,
            ),
        };

        Self {
            api_key: String::new(),
            base_url: base_url.to_string(),
            model: model.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Check if a credential is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_spelling_is_stable() {
        assert_eq!(ProviderId::Groq.to_string(), "groq");
        assert_eq!(ProviderId::OpenAi.to_string(), "openai");
        assert_eq!(ProviderId::Together.to_string(), "together");
    }

    #[test]
    fn serde_round_trips_lowercase_ids() {
        for id in ProviderId::ALL {
            let yaml = serde_yaml::to_string(&id).unwrap();
            assert_eq!(yaml.trim(), id.as_str());
            let back: ProviderId = serde_yaml::from_str(id.as_str()).unwrap();
            assert_eq!(back, id);
        }
    }

    #[test]
    fn families_cover_all_ids() {
        assert_eq!(ProviderId::Groq.family(), ProviderFamily::OpenAiCompatible);
        assert_eq!(ProviderId::OpenAi.family(), ProviderFamily::OpenAiCompatible);
        assert_eq!(ProviderId::Together.family(), ProviderFamily::OpenAiCompatible);
        assert_eq!(ProviderId::Anthropic.family(), ProviderFamily::Anthropic);
        assert_eq!(ProviderId::Google.family(), ProviderFamily::Google);
    }

    #[test]
    fn defaults_match_provider_endpoints() {
        let groq = ProviderConfig::defaults_for(ProviderId::Groq);
        assert_eq!(groq.base_url, "https://api.groq.com/openai/v1");
        assert!(!groq.is_configured());

        let google = ProviderConfig::defaults_for(ProviderId::Google);
        assert_eq!(google.base_url, "https://generativelanguage.googleapis.com/v1");
        assert_eq!(google.model, "gemini-pro");
    }
}
