use barkhood_ai::{
    AiConfig, AiError, AssistantService, ChatTurn, ConversationPolicy, Coordinates, HEADER_API_KEY,
    PlaceQuery, ReplyContext, Sender,
};
use barkhood_i18n::Language;
use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

const CHAT_PATH: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";
const PLACES_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

const ENGLISH_INSTRUCTION: &str = "You are a virtual dog expert inside the \"Neighborhood Bark\" \
    app for local dog owners. Answer in English in a friendly, short and professional way. \
    Offer tips on training and nutrition, and recommend places in the neighborhood.";

const DOG_PARK_PROMPT: &str = "Find places relevant to: dog park. Reply in English with a \
    short description of the best places in the neighborhood.";

fn service_for(server: &MockServer) -> AssistantService<barkhood_ai::GeminiProvider> {
    let config = AiConfig {
        base_url: server.base_url(),
        ..AiConfig::default()
    }
    .with_api_key("test-key");
    AssistantService::gemini(config).expect("client should build")
}

#[tokio::test]
async fn chat_posts_history_and_reads_reply() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(CHAT_PATH)
            .header(HEADER_API_KEY, "test-key")
            .json_body(json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "Is chocolate bad for dogs?"}]},
                    {"role": "model", "parts": [{"text": "Yes, keep it away."}]},
                    {"role": "user", "parts": [{"text": "What about grapes?"}]}
                ],
                "systemInstruction": {"parts": [{"text": ENGLISH_INSTRUCTION}]}
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Grapes are toxic too."}]}
                }]
            }));
    });

    let history = vec![
        ChatTurn {
            id: 0,
            text: "Hi! Ask me anything.".into(),
            sender: Sender::Assistant,
        },
        ChatTurn {
            id: 1,
            text: "Is chocolate bad for dogs?".into(),
            sender: Sender::User,
        },
        ChatTurn {
            id: 2,
            text: "Yes, keep it away.".into(),
            sender: Sender::Assistant,
        },
    ];
    let reply = service_for(&server)
        .chat(
            &history,
            "What about grapes?",
            &ReplyContext::for_language(Language::En),
        )
        .await;

    assert_eq!(reply, "Grapes are toxic too.");
    mock.assert();
}

#[tokio::test]
async fn chat_falls_back_on_server_error() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH);
        then.status(503)
            .header("content-type", "application/json")
            .json_body(json!({
                "error": {"code": 503, "message": "overloaded", "status": "UNAVAILABLE"}
            }));
    });

    let reply = service_for(&server)
        .chat(&[], "hello", &ReplyContext::for_language(Language::He))
        .await;

    assert_eq!(reply, "מצטער, אני לא מצליח לענות כרגע. נסה שוב מאוחר יותר!");
    mock.assert();
}

#[tokio::test]
async fn chat_without_key_never_reaches_the_network() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH);
        then.status(200);
    });
    let config = AiConfig {
        base_url: server.base_url(),
        history: ConversationPolicy::Stateless,
        ..AiConfig::default()
    };
    let service = AssistantService::gemini(config).expect("client should build");

    let reply = service
        .chat(&[], "hello", &ReplyContext::for_language(Language::Es))
        .await;

    assert_eq!(
        reply,
        "Lo siento, no puedo responder ahora. ¡Inténtalo más tarde!"
    );
    mock.assert_calls(0);
}

#[tokio::test]
async fn search_places_sends_location_and_maps_chunks() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(PLACES_PATH)
            .header(HEADER_API_KEY, "test-key")
            .json_body(json!({
                "contents": [{"role": "user", "parts": [{"text": DOG_PARK_PROMPT}]}],
                "tools": [{"googleMaps": {}}],
                "toolConfig": {
                    "retrievalConfig": {"latLng": {"latitude": 32.0853, "longitude": 34.7818}}
                }
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Herzl Dog Park is the closest."}]
                    },
                    "groundingMetadata": {"groundingChunks": [
                        {"maps": {
                            "title": "Herzl Dog Park",
                            "uri": "https://maps.google.com/?cid=1"
                        }},
                        {"maps": {"uri": "https://maps.google.com/?cid=2"}}
                    ]}
                }]
            }));
    });

    let query = PlaceQuery {
        text: "dog park".into(),
        coordinates: Some(Coordinates {
            latitude: 32.0853,
            longitude: 34.7818,
        }),
        language: Language::En,
    };
    let result = service_for(&server)
        .search_places(&query)
        .await
        .expect("search should succeed");

    assert_eq!(
        result.summary.as_deref(),
        Some("Herzl Dog Park is the closest.")
    );
    assert_eq!(result.places.len(), 2);
    assert_eq!(result.places[0].title.as_deref(), Some("Herzl Dog Park"));
    assert_eq!(result.places[1].title, None);
    assert_eq!(
        result.places[1].uri.as_deref(),
        Some("https://maps.google.com/?cid=2")
    );
    mock.assert();
}

#[tokio::test]
async fn search_places_surfaces_provider_status() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PLACES_PATH);
        then.status(403)
            .header("content-type", "application/json")
            .json_body(json!({
                "error": {
                    "code": 403,
                    "message": "API key not valid",
                    "status": "PERMISSION_DENIED"
                }
            }));
    });

    let query = PlaceQuery {
        text: "vet".into(),
        coordinates: None,
        language: Language::He,
    };
    let err = service_for(&server)
        .search_places(&query)
        .await
        .expect_err("search should fail");

    match err {
        AiError::Provider { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "PERMISSION_DENIED: API key not valid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn search_places_reports_undecodable_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PLACES_PATH);
        then.status(200).body("<html>not json</html>");
    });

    let query = PlaceQuery {
        text: "groomer".into(),
        coordinates: None,
        language: Language::En,
    };
    let err = service_for(&server)
        .search_places(&query)
        .await
        .expect_err("search should fail");

    assert!(matches!(err, AiError::Decode { .. }));
}
