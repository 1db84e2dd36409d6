//! Error types for calls into the generative model.

use thiserror::Error;

/// Failure modes of a single generative request.
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key was configured for the provider.
    #[error("generative model API key is not configured")]
    MissingApiKey,
    /// The HTTP exchange itself failed.
    #[error("generative model request failed")]
    Transport {
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The provider answered with a non-success status.
    #[error("generative model returned status {status}: {message}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Provider error message, or the raw body when it is not structured.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode generative model response")]
    Decode {
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The provider answered but produced no usable text.
    #[error("generative model returned an empty response")]
    EmptyResponse,
}

/// Convenience alias for adapter results.
pub type AiResult<T> = Result<T, AiError>;

impl From<reqwest::Error> for AiError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport { source }
    }
}

impl From<serde_json::Error> for AiError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_mentions_status_and_message() {
        let err = AiError::Provider {
            status: 429,
            message: "quota exhausted".into(),
        };
        assert_eq!(
            err.to_string(),
            "generative model returned status 429: quota exhausted"
        );
    }

    #[test]
    fn decode_error_keeps_its_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AiError::from(source);
        assert!(matches!(err, AiError::Decode { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
