//! Wire types for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Role of a content entry authored by the user.
pub const ROLE_USER: &str = "user";
/// Role of a content entry authored by the model.
pub const ROLE_MODEL: &str = "model";

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Conversation contents, oldest first.
    pub contents: Vec<Content>,
    /// Optional system instruction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Tools the model may call.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    /// Tool configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

/// One conversational entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`; omitted for system instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// User-authored text.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role(ROLE_USER, text)
    }

    /// Model-authored text.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role(ROLE_MODEL, text)
    }

    /// Role-less text, as used for system instructions.
    #[must_use]
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part::text(text)],
        }
    }
}

/// A content part. Only text parts are produced or read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Text payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    /// Text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Tool declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Google Maps grounding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<GoogleMaps>,
}

impl Tool {
    /// The Google Maps grounding tool.
    #[must_use]
    pub const fn google_maps() -> Self {
        Self {
            google_maps: Some(GoogleMaps {}),
        }
    }
}

/// Marker payload for the Google Maps tool; serialises as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleMaps {}

/// Tool configuration block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Retrieval hints for grounding tools.
    pub retrieval_config: RetrievalConfig,
}

/// Retrieval hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    /// Location to bias results toward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat_lng: Option<LatLng>,
}

/// Geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Candidate completions; only the first is read.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text of the first candidate, with all text parts joined.
    ///
    /// Returns `None` when the candidate carries no non-blank text.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let joined: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }

    /// Grounding chunks of the first candidate, in provider order.
    #[must_use]
    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map_or(&[], |metadata| metadata.grounding_chunks.as_slice())
    }
}

/// One candidate completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content.
    #[serde(default)]
    pub content: Option<Content>,
    /// Grounding sources backing the content.
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Source chunks.
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// A single grounding source. Non-map sources leave `maps` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingChunk {
    /// Map place, when the source is Google Maps.
    #[serde(default)]
    pub maps: Option<MapsChunk>,
}

/// Map place reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapsChunk {
    /// Place name.
    #[serde(default)]
    pub title: Option<String>,
    /// Link to the place.
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn places_request_serialises_in_camel_case() {
        let request = GenerateRequest {
            contents: vec![Content::user("parks")],
            system_instruction: None,
            tools: vec![Tool::google_maps()],
            tool_config: Some(ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: Some(LatLng {
                        latitude: 32.08,
                        longitude: 34.78,
                    }),
                },
            }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "parks"}]}],
                "tools": [{"googleMaps": {}}],
                "toolConfig": {
                    "retrievalConfig": {"latLng": {"latitude": 32.08, "longitude": 34.78}}
                }
            })
        );
    }

    #[test]
    fn system_instruction_has_no_role() {
        let request = GenerateRequest {
            contents: vec![Content::user("hi")],
            system_instruction: Some(Content::instruction("be brief")),
            ..GenerateRequest::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["systemInstruction"],
            json!({"parts": [{"text": "be brief"}]})
        );
        assert!(value.get("tools").is_none());
        assert!(value.get("toolConfig").is_none());
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {
                    "role": "model",
                    "parts": [{"text": "Hello "}, {"functionCall": {}}, {"text": "there"}]
                }},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello there"));
    }

    #[test]
    fn blank_or_missing_text_is_none() {
        assert_eq!(GenerateResponse::default().text(), None);
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}}]
        }))
        .unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn grounding_chunks_tolerate_non_map_sources() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "groundingMetadata": {"groundingChunks": [
                    {"maps": {"title": "Herzl Dog Park", "uri": "https://maps.example/1"}},
                    {"web": {"uri": "https://example.com"}},
                    {"maps": {"title": "Vet"}}
                ]}
            }]
        }))
        .unwrap();
        let chunks = response.grounding_chunks();
        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks[0].maps.as_ref().and_then(|m| m.title.as_deref()),
            Some("Herzl Dog Park")
        );
        assert!(chunks[1].maps.is_none());
        assert!(chunks[2].maps.as_ref().is_some_and(|m| m.uri.is_none()));
    }
}
