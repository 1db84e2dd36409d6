//! Argument parsing and command dispatch.

use barkhood_i18n::Language;
use barkhood_telemetry::{LogFormat, LoggingConfig, init_logging, log_format_from_env};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::client::{AppContext, CliError, CliResult};
use crate::commands::chat::handle_chat;
use crate::commands::places::handle_places;
use crate::commands::strings::handle_strings;

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        format: log_format_from_env().unwrap_or_else(LogFormat::infer),
        app_version: env!("CARGO_PKG_VERSION"),
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    tracing::debug!(
        command = cli.command.name(),
        language = cli.lang.code(),
        "dispatching command"
    );
    let result = match &cli.command {
        Command::Strings => handle_strings(cli.lang, cli.output),
        Command::Chat(args) => handle_chat(&AppContext::from_cli(&cli)?, args).await,
        Command::Places(args) => handle_places(&AppContext::from_cli(&cli)?, args).await,
    };
    if let Err(CliError::Failure(err)) = &result {
        tracing::warn!(
            command = cli.command.name(),
            error = %format!("{err:#}"),
            "command failed"
        );
    }
    result
}

#[derive(Parser)]
#[command(name = "barkhood", version, about = "Neighbourhood dog expert in the terminal")]
pub(crate) struct Cli {
    /// Gemini API key.
    #[arg(long, global = true, env = "API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,
    /// Override the Gemini endpoint base URL.
    #[arg(long, global = true, env = "BARKHOOD_AI_BASE_URL")]
    pub(crate) base_url: Option<String>,
    /// Language for replies and catalogs.
    #[arg(
        long,
        global = true,
        env = "BARKHOOD_LANG",
        value_parser = parse_language,
        default_value = "he"
    )]
    pub(crate) lang: Language,
    /// Request timeout in seconds; 0 disables it.
    #[arg(long, global = true, env = "BARKHOOD_HTTP_TIMEOUT_SECS")]
    pub(crate) timeout: Option<u64>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Ask the dog expert a question.
    Chat(ChatArgs),
    /// Find places near a position.
    Places(PlacesArgs),
    /// Print the catalog for the selected language.
    Strings,
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Chat(_) => "chat",
            Self::Places(_) => "places",
            Self::Strings => "strings",
        }
    }
}

#[derive(Args)]
pub(crate) struct ChatArgs {
    /// Question for the expert.
    pub(crate) message: String,
}

#[derive(Args)]
pub(crate) struct PlacesArgs {
    /// What to look for, e.g. "dog park".
    pub(crate) query: String,
    /// Latitude in degrees; requires --lng.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) lat: Option<f64>,
    /// Longitude in degrees; requires --lat.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) lng: Option<f64>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::from_lang_tag(value).ok_or_else(|| {
        let supported: Vec<_> = Language::all().iter().map(|language| language.code()).collect();
        format!("unsupported language '{value}' (expected one of {})", supported.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_accepts_region_tags() {
        assert_eq!(parse_language("en-US"), Ok(Language::En));
        assert_eq!(parse_language("he"), Ok(Language::He));
        assert!(parse_language("it").unwrap_err().contains("he, en"));
    }

    #[test]
    fn places_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "barkhood", "places", "park", "--lat", "-33.86", "--lng", "151.2",
        ])
        .unwrap();
        let Command::Places(args) = cli.command else {
            panic!("expected places command");
        };
        assert_eq!(args.query, "park");
        assert_eq!(args.lat, Some(-33.86));
        assert_eq!(args.lng, Some(151.2));
    }

    #[test]
    fn command_names_match_subcommands() {
        for (argv, expected) in [
            (vec!["barkhood", "strings"], "strings"),
            (vec!["barkhood", "chat", "hi"], "chat"),
            (vec!["barkhood", "places", "park"], "places"),
        ] {
            let cli = Cli::try_parse_from(argv).unwrap();
            assert_eq!(cli.command.name(), expected);
        }
    }

    #[tokio::test]
    async fn strings_dispatch_needs_no_credentials() {
        let cli = Cli::try_parse_from(["barkhood", "--output", "json", "strings"]).unwrap();
        assert!(dispatch(cli).await.is_ok());
    }

    #[test]
    fn output_flag_selects_json() {
        let cli = Cli::try_parse_from(["barkhood", "--output", "json", "strings"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
