//! Error type and shared context for command handlers.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use barkhood_ai::{AiConfig, AssistantService, GeminiProvider};
use barkhood_i18n::Language;

use crate::cli::{Cli, OutputFormat};

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Everything a command handler needs.
pub(crate) struct AppContext {
    pub(crate) service: AssistantService<GeminiProvider>,
    pub(crate) language: Language,
    pub(crate) output: OutputFormat,
}

impl AppContext {
    /// Build the context from the environment, with flags taking precedence.
    pub(crate) fn from_cli(cli: &Cli) -> CliResult<Self> {
        let config = resolve_config(AiConfig::from_env(), cli);
        let service = AssistantService::gemini(config)
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            service,
            language: cli.lang,
            output: cli.output,
        })
    }
}

/// Overlay command-line flags on a base configuration.
pub(crate) fn resolve_config(base: AiConfig, cli: &Cli) -> AiConfig {
    let mut config = match &cli.api_key {
        Some(key) => base.with_api_key(key.clone()),
        None => base,
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(secs) = cli.timeout {
        config.timeout_secs = (secs > 0).then_some(secs);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use clap::Parser;

    #[test]
    fn exit_codes_separate_validation_from_failure() {
        assert_eq!(CliError::validation("bad").exit_code(), 2);
        assert_eq!(CliError::failure(anyhow!("down")).exit_code(), 3);
        assert_eq!(CliError::validation("bad").display_message(), "bad");
    }

    #[test]
    fn flags_override_environment_configuration() {
        let cli = Cli::parse_from([
            "barkhood",
            "--api-key",
            "flag-key",
            "--base-url",
            "http://localhost:9000/",
            "--timeout",
            "5",
            "strings",
        ]);
        let base = AiConfig::default().with_api_key("env-key");
        let config = resolve_config(base, &cli);
        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn missing_flags_keep_environment_values() {
        let cli = Cli {
            api_key: None,
            base_url: None,
            lang: Language::He,
            timeout: None,
            output: OutputFormat::Table,
            command: Command::Strings,
        };
        let base = AiConfig::default().with_api_key("env-key");
        let config = resolve_config(base, &cli);
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.timeout_secs, None);
    }
}
