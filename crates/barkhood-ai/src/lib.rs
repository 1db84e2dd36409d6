#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Generative-AI adapter for Barkhood.
//!
//! [`AssistantService`] wraps a [`GenerativeProvider`] and exposes the two
//! calls the app makes: a conversational `chat` that always yields text, and a
//! map-grounded `search_places` that reports failures to its caller.

mod config;
mod error;
mod provider;
mod service;
mod types;

pub use config::{
    AiConfig, ConversationPolicy, DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_HISTORY_TURNS,
    DEFAULT_PLACES_MODEL, ENV_API_KEY, ENV_BASE_URL, ENV_CHAT_MODEL, ENV_GEMINI_API_KEY,
    ENV_PLACES_MODEL, ENV_TIMEOUT_SECS,
};
pub use error::{AiError, AiResult};
pub use provider::{GeminiProvider, GenerativeProvider, HEADER_API_KEY};
pub use service::{
    AssistantService, ChatTurn, Coordinates, PlaceQuery, PlaceReference, PlaceSearchResult,
    ReplyContext, Sender,
};
pub use types::{
    Candidate, Content, GenerateRequest, GenerateResponse, GoogleMaps, GroundingChunk,
    GroundingMetadata, LatLng, MapsChunk, Part, RetrievalConfig, ROLE_MODEL, ROLE_USER, Tool,
    ToolConfig,
};
