//! Adapter configuration resolved from the process or build environment.
//!
//! # Design
//! - Every source funnels through [`AiConfig::from_lookup`], so parsing is
//!   tested without touching the real environment.
//! - Blank values count as absent; a malformed timeout is logged and ignored.

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used for assistant conversations.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-flash-preview";
/// Model used for map-grounded place search.
pub const DEFAULT_PLACES_MODEL: &str = "gemini-2.5-flash";
/// Prior turns carried into a chat request by default.
pub const DEFAULT_HISTORY_TURNS: usize = 12;

/// Primary API key variable.
pub const ENV_API_KEY: &str = "API_KEY";
/// Secondary API key variable, consulted when [`ENV_API_KEY`] is unset.
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Base URL override.
pub const ENV_BASE_URL: &str = "BARKHOOD_AI_BASE_URL";
/// Chat model override.
pub const ENV_CHAT_MODEL: &str = "BARKHOOD_CHAT_MODEL";
/// Places model override.
pub const ENV_PLACES_MODEL: &str = "BARKHOOD_PLACES_MODEL";
/// Request timeout override, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "BARKHOOD_HTTP_TIMEOUT_SECS";

/// How much of the visible conversation accompanies a new chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationPolicy {
    /// Each message is sent on its own.
    Stateless,
    /// The most recent `max_turns` prior turns are sent before the message.
    SessionCarried {
        /// Upper bound on carried turns.
        max_turns: usize,
    },
}

impl Default for ConversationPolicy {
    fn default() -> Self {
        Self::SessionCarried {
            max_turns: DEFAULT_HISTORY_TURNS,
        }
    }
}

/// Settings for [`crate::GeminiProvider`] and [`crate::AssistantService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// Credential sent with every request; `None` fails requests up front.
    pub api_key: Option<String>,
    /// Endpoint root without a trailing slash.
    pub base_url: String,
    /// Model for assistant conversations.
    pub chat_model: String,
    /// Model for place search.
    pub places_model: String,
    /// Conversation history policy for chat.
    pub history: ConversationPolicy,
    /// Optional request timeout. Only honoured on native targets.
    pub timeout_secs: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            places_model: DEFAULT_PLACES_MODEL.to_string(),
            history: ConversationPolicy::default(),
            timeout_secs: None,
        }
    }
}

impl AiConfig {
    /// Resolve configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from variables captured when the crate was compiled.
    ///
    /// Browser builds have no process environment, so this is how a wasm
    /// bundle receives its key.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_API_KEY => option_env!("API_KEY"),
                ENV_GEMINI_API_KEY => option_env!("GEMINI_API_KEY"),
                ENV_BASE_URL => option_env!("BARKHOOD_AI_BASE_URL"),
                ENV_CHAT_MODEL => option_env!("BARKHOOD_CHAT_MODEL"),
                ENV_PLACES_MODEL => option_env!("BARKHOOD_PLACES_MODEL"),
                ENV_TIMEOUT_SECS => option_env!("BARKHOOD_HTTP_TIMEOUT_SECS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Resolve configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        let timeout_secs = read(ENV_TIMEOUT_SECS).and_then(|raw| match raw.parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(secs),
            Err(err) => {
                tracing::warn!(value = %raw, error = %err, "ignoring invalid request timeout");
                None
            }
        });

        Self {
            api_key: read(ENV_API_KEY).or_else(|| read(ENV_GEMINI_API_KEY)),
            base_url: read(ENV_BASE_URL)
                .map_or(defaults.base_url, |url| url.trim_end_matches('/').to_string()),
            chat_model: read(ENV_CHAT_MODEL).unwrap_or(defaults.chat_model),
            places_model: read(ENV_PLACES_MODEL).unwrap_or(defaults.places_model),
            history: defaults.history,
            timeout_secs,
        }
    }

    /// Replace the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    /// Replace the conversation policy.
    #[must_use]
    pub const fn with_history(mut self, history: ConversationPolicy) -> Self {
        self.history = history;
        self
    }

    /// Whether a usable API key is present.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
