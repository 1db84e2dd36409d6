use barkhood_ai::ReplyContext;

use crate::cli::ChatArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_chat;

pub(crate) async fn handle_chat(ctx: &AppContext, args: &ChatArgs) -> CliResult<()> {
    let reply = ask(ctx, &args.message).await?;
    render_chat(&reply, ctx.output)
}

/// One-shot question. Provider failures come back as the localized fallback.
pub(crate) async fn ask(ctx: &AppContext, message: &str) -> CliResult<String> {
    let message = message.trim();
    if message.is_empty() {
        return Err(CliError::validation("message must not be empty"));
    }
    let context = ReplyContext::for_language(ctx.language);
    Ok(ctx.service.chat(&[], message, &context).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use barkhood_ai::{AiConfig, AssistantService};
    use barkhood_i18n::{Language, catalog};
    use httpmock::prelude::*;
    use serde_json::json;

    fn context_for(server: &MockServer, language: Language) -> AppContext {
        let config = AiConfig {
            base_url: server.base_url(),
            ..AiConfig::default()
        }
        .with_api_key("test-key");
        AppContext {
            service: AssistantService::gemini(config).expect("client"),
            language,
            output: OutputFormat::Table,
        }
    }

    #[tokio::test]
    async fn chat_prints_the_model_reply() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-3-flash-preview:generateContent")
                .header("x-goog-api-key", "test-key");
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "Use treats." }] }
                }]
            }));
        });

        let ctx = context_for(&server, Language::En);
        let reply = ask(&ctx, "how do I teach sit?").await.expect("reply");
        assert_eq!(reply, "Use treats.");
        mock.assert();
    }

    #[tokio::test]
    async fn provider_failure_falls_back_without_an_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST);
            then.status(500).body("boom");
        });

        let ctx = context_for(&server, Language::Fr);
        let reply = ask(&ctx, "bonjour").await.expect("fallback");
        assert_eq!(reply, catalog(Language::Fr).chat_fallback);
    }

    #[tokio::test]
    async fn blank_message_is_a_validation_error() {
        let server = MockServer::start_async().await;
        let ctx = context_for(&server, Language::He);
        let err = ask(&ctx, "   ").await.expect_err("validation");
        assert_eq!(err.exit_code(), 2);
    }
}
