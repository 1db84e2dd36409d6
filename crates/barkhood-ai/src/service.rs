//! Assistant chat and map-grounded place search.
//!
//! # Design
//! - `chat` never fails: any provider error, or an empty reply, yields the
//!   caller's localised fallback and is logged.
//! - `search_places` hands provider errors back so the view can show its
//!   no-results state.
//! - Neither call caches; every invocation reaches the provider.

use barkhood_i18n::{Language, catalog};
use serde::{Deserialize, Serialize};

use crate::config::{AiConfig, ConversationPolicy};
use crate::error::{AiError, AiResult};
use crate::provider::{GeminiProvider, GenerativeProvider};
use crate::types::{
    Content, GenerateRequest, GenerateResponse, LatLng, RetrievalConfig, Tool, ToolConfig,
};

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person using the app.
    User,
    /// The assistant.
    Assistant,
}

/// One entry in a visible conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Identifier unique within its thread.
    pub id: u64,
    /// Turn text.
    pub text: String,
    /// Author.
    pub sender: Sender,
}

/// Language and fallback text for a chat reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyContext {
    /// Language the reply should be written in.
    pub language: Language,
    /// Text returned when no reply can be produced.
    pub fallback: String,
}

impl ReplyContext {
    /// Context using the catalog's fallback for `language`.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            fallback: catalog(language).chat_fallback.to_string(),
        }
    }
}

/// Geographic position of the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

/// Input to a place search.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    /// Free-text description of what to find.
    pub text: String,
    /// Where to look; omitted from the request when unknown.
    pub coordinates: Option<Coordinates>,
    /// Language of the summary.
    pub language: Language,
}

/// A place cited by the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceReference {
    /// Place name, when the source carried one.
    pub title: Option<String>,
    /// Link to the place, when the source carried one.
    pub uri: Option<String>,
}

/// Outcome of a successful place search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSearchResult {
    /// Model-written summary; `None` when the model returned no text.
    pub summary: Option<String>,
    /// One reference per grounding source, in provider order.
    pub places: Vec<PlaceReference>,
}

impl PlaceSearchResult {
    /// Extract the summary and references from a provider response.
    #[must_use]
    pub fn from_response(response: &GenerateResponse) -> Self {
        let places = response
            .grounding_chunks()
            .iter()
            .map(|chunk| PlaceReference {
                title: chunk.maps.as_ref().and_then(|maps| non_blank(maps.title.as_deref())),
                uri: chunk.maps.as_ref().and_then(|maps| non_blank(maps.uri.as_deref())),
            })
            .collect();
        Self {
            summary: response.text(),
            places,
        }
    }

    /// Whether the search produced neither text nor references.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.places.is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Front door for the assistant and place search.
#[derive(Debug, Clone)]
pub struct AssistantService<P> {
    provider: P,
    config: AiConfig,
}

impl AssistantService<GeminiProvider> {
    /// Service backed by the Gemini REST API.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Transport`] when the HTTP client cannot be built.
    pub fn gemini(config: AiConfig) -> AiResult<Self> {
        let provider = GeminiProvider::new(&config)?;
        Ok(Self::new(provider, config))
    }
}

impl<P: GenerativeProvider> AssistantService<P> {
    /// Service over an arbitrary provider.
    pub const fn new(provider: P, config: AiConfig) -> Self {
        Self { provider, config }
    }

    /// Active configuration.
    pub const fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Ask the dog expert. Always returns displayable text.
    pub async fn chat(
        &self,
        history: &[ChatTurn],
        message: &str,
        context: &ReplyContext,
    ) -> String {
        let request = self.chat_request(history, message, context.language);
        let outcome = self
            .provider
            .generate(&self.config.chat_model, &request)
            .await
            .and_then(|response| response.text().ok_or(AiError::EmptyResponse));

        match outcome {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(
                    model = %self.config.chat_model,
                    error = %err,
                    "assistant reply failed; returning fallback"
                );
                context.fallback.clone()
            }
        }
    }

    /// Find places near the user that match the query.
    ///
    /// # Errors
    ///
    /// Propagates every provider failure.
    pub async fn search_places(&self, query: &PlaceQuery) -> AiResult<PlaceSearchResult> {
        let request = places_request(query);
        let response = self
            .provider
            .generate(&self.config.places_model, &request)
            .await
            .inspect_err(|err| {
                tracing::error!(
                    model = %self.config.places_model,
                    error = %err,
                    "place search failed"
                );
            })?;
        Ok(PlaceSearchResult::from_response(&response))
    }

    fn chat_request(
        &self,
        history: &[ChatTurn],
        message: &str,
        language: Language,
    ) -> GenerateRequest {
        let mut contents = match self.config.history {
            ConversationPolicy::Stateless => Vec::new(),
            ConversationPolicy::SessionCarried { max_turns } => carried_history(history, max_turns),
        };
        contents.push(Content::user(message));

        GenerateRequest {
            contents,
            system_instruction: Some(Content::instruction(chat_instruction(language))),
            ..GenerateRequest::default()
        }
    }
}

fn carried_history(history: &[ChatTurn], max_turns: usize) -> Vec<Content> {
    let start = history.len().saturating_sub(max_turns);
    history[start..]
        .iter()
        .filter(|turn| !turn.text.trim().is_empty())
        // Gemini expects a conversation to open with a user turn.
        .skip_while(|turn| turn.sender == Sender::Assistant)
        .map(|turn| match turn.sender {
            Sender::User => Content::user(turn.text.clone()),
            Sender::Assistant => Content::model(turn.text.clone()),
        })
        .collect()
}

fn chat_instruction(language: Language) -> String {
    format!(
        "You are a virtual dog expert inside the \"Neighborhood Bark\" app for local dog owners. \
         Answer in {} in a friendly, short and professional way. \
         Offer tips on training and nutrition, and recommend places in the neighborhood.",
        language.english_name()
    )
}

fn places_request(query: &PlaceQuery) -> GenerateRequest {
    let prompt = format!(
        "Find places relevant to: {}. \
         Reply in {} with a short description of the best places in the neighborhood.",
        query.text.trim(),
        query.language.english_name()
    );
    let lat_lng = query.coordinates.map(|coords| LatLng {
        latitude: coords.latitude,
        longitude: coords.longitude,
    });

    GenerateRequest {
        contents: vec![Content::user(prompt)],
        system_instruction: None,
        tools: vec![Tool::google_maps()],
        tool_config: Some(ToolConfig {
            retrieval_config: RetrievalConfig { lat_lng },
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::types::ROLE_MODEL;

    type Script = Box<dyn Fn() -> AiResult<GenerateResponse> + Send + Sync>;

    struct StubProvider {
        script: Script,
        calls: Mutex<Vec<(String, GenerateRequest)>>,
    }

    impl StubProvider {
        fn new(script: impl Fn() -> AiResult<GenerateResponse> + Send + Sync + 'static) -> Self {
            Self {
                script: Box::new(script),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn replying(text: &'static str) -> Self {
            Self::new(move || Ok(text_response(text)))
        }

        fn calls(&self) -> Vec<(String, GenerateRequest)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeProvider for StubProvider {
        async fn generate(
            &self,
            model: &str,
            request: &GenerateRequest,
        ) -> AiResult<GenerateResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_string(), request.clone()));
            (self.script)()
        }
    }

    fn text_response(text: &str) -> GenerateResponse {
        serde_json::from_value(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        }))
        .unwrap()
    }

    fn turn(id: u64, sender: Sender, text: &str) -> ChatTurn {
        ChatTurn {
            id,
            text: text.to_string(),
            sender,
        }
    }

    fn service(provider: StubProvider) -> AssistantService<StubProvider> {
        AssistantService::new(provider, AiConfig::default().with_api_key("test"))
    }

    #[tokio::test]
    async fn chat_returns_provider_reply() {
        let service = service(StubProvider::replying("Walk twice a day."));
        let reply = service
            .chat(&[], "How often should I walk?", &ReplyContext::for_language(Language::En))
            .await;
        assert_eq!(reply, "Walk twice a day.");

        let calls = service.provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gemini-3-flash-preview");
        let instruction = calls[0].1.system_instruction.as_ref().unwrap();
        assert!(
            instruction.parts[0]
                .text
                .as_deref()
                .unwrap()
                .contains("Answer in English")
        );
    }

    #[tokio::test]
    async fn chat_swallows_provider_errors() {
        let service = service(StubProvider::new(|| {
            Err(AiError::Provider {
                status: 500,
                message: "boom".into(),
            })
        }));
        let reply = service
            .chat(&[], "hello", &ReplyContext::for_language(Language::He))
            .await;
        assert_eq!(reply, "מצטער, אני לא מצליח לענות כרגע. נסה שוב מאוחר יותר!");
    }

    #[tokio::test]
    async fn chat_treats_empty_reply_as_failure() {
        let service = service(StubProvider::new(|| Ok(GenerateResponse::default())));
        let context = ReplyContext {
            language: Language::Fr,
            fallback: "plus tard".into(),
        };
        assert_eq!(service.chat(&[], "bonjour", &context).await, "plus tard");
    }

    #[tokio::test]
    async fn session_history_is_bounded_and_opens_with_user() {
        let provider = StubProvider::replying("ok");
        let config = AiConfig::default()
            .with_history(ConversationPolicy::SessionCarried { max_turns: 3 });
        let service = AssistantService::new(provider, config);
        let history = vec![
            turn(1, Sender::Assistant, "greeting"),
            turn(2, Sender::User, "first"),
            turn(3, Sender::Assistant, "reply one"),
            turn(4, Sender::User, "second"),
            turn(5, Sender::Assistant, "reply two"),
        ];

        service
            .chat(&history, "third", &ReplyContext::for_language(Language::En))
            .await;

        let request = &service.provider.calls()[0].1;
        let texts: Vec<_> = request
            .contents
            .iter()
            .map(|content| content.parts[0].text.clone().unwrap())
            .collect();
        assert_eq!(texts, vec!["second", "reply two", "third"]);
        assert_eq!(request.contents[1].role.as_deref(), Some(ROLE_MODEL));
    }

    #[tokio::test]
    async fn stateless_policy_sends_only_the_message() {
        let config = AiConfig::default().with_history(ConversationPolicy::Stateless);
        let service = AssistantService::new(StubProvider::replying("ok"), config);
        let history = vec![turn(1, Sender::User, "earlier")];
        service
            .chat(&history, "now", &ReplyContext::for_language(Language::De))
            .await;
        let request = &service.provider.calls()[0].1;
        assert_eq!(request.contents, vec![Content::user("now")]);
    }

    #[tokio::test]
    async fn search_places_maps_every_grounding_chunk() {
        let service = service(StubProvider::new(|| {
            Ok(serde_json::from_value(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "Two parks nearby."}]},
                    "groundingMetadata": {"groundingChunks": [
                        {"maps": {"title": "Herzl Dog Park", "uri": "https://maps.example/herzl"}},
                        {"web": {"uri": "https://example.com"}},
                        {"maps": {"title": "  ", "uri": "https://maps.example/x"}}
                    ]}
                }]
            }))
            .unwrap())
        }));
        let query = PlaceQuery {
            text: "dog park".into(),
            coordinates: Some(Coordinates {
                latitude: 32.08,
                longitude: 34.78,
            }),
            language: Language::He,
        };

        let result = service.search_places(&query).await.unwrap();
        assert_eq!(result.summary.as_deref(), Some("Two parks nearby."));
        assert_eq!(
            result.places,
            vec![
                PlaceReference {
                    title: Some("Herzl Dog Park".into()),
                    uri: Some("https://maps.example/herzl".into()),
                },
                PlaceReference::default(),
                PlaceReference {
                    title: None,
                    uri: Some("https://maps.example/x".into()),
                },
            ]
        );

        let (model, request) = &service.provider.calls()[0];
        assert_eq!(model, "gemini-2.5-flash");
        assert_eq!(request.tools, vec![Tool::google_maps()]);
        let lat_lng = request
            .tool_config
            .as_ref()
            .and_then(|config| config.retrieval_config.lat_lng)
            .unwrap();
        assert!((lat_lng.latitude - 32.08).abs() < f64::EPSILON);
        let prompt = request.contents[0].parts[0].text.as_deref().unwrap();
        assert!(prompt.contains("dog park"));
        assert!(prompt.contains("Hebrew"));
    }

    #[tokio::test]
    async fn search_places_omits_unknown_location() {
        let service = service(StubProvider::new(|| Ok(GenerateResponse::default())));
        let query = PlaceQuery {
            text: "vet".into(),
            coordinates: None,
            language: Language::En,
        };
        let result = service.search_places(&query).await.unwrap();
        assert!(result.is_empty());

        let request = &service.provider.calls()[0].1;
        assert!(request.tool_config.as_ref().unwrap().retrieval_config.lat_lng.is_none());
    }

    #[tokio::test]
    async fn search_places_propagates_errors() {
        let service = service(StubProvider::new(|| Err(AiError::EmptyResponse)));
        let query = PlaceQuery {
            text: "groomer".into(),
            coordinates: None,
            language: Language::Es,
        };
        let err = service.search_places(&query).await.unwrap_err();
        assert!(matches!(err, AiError::EmptyResponse));
    }

    #[tokio::test]
    async fn repeated_searches_are_not_cached() {
        let service = service(StubProvider::new(|| Ok(GenerateResponse::default())));
        let query = PlaceQuery {
            text: "park".into(),
            coordinates: None,
            language: Language::En,
        };
        service.search_places(&query).await.unwrap();
        service.search_places(&query).await.unwrap();
        assert_eq!(service.provider.calls().len(), 2);
    }
}
