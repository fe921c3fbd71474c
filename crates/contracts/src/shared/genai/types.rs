use super::schema::ResponseSchema;
use async_trait::async_trait;
use thiserror::Error;

/// Generative service errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("client is not configured: {0}")]
    Configuration(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("prompt blocked: {0}")]
    Blocked(String),

    #[error("response contained no text")]
    EmptyResponse,
}

/// A single generation call.
///
/// Without a schema the reply is free text. With a schema the service is asked
/// for an `application/json` document shaped like the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub schema: Option<ResponseSchema>,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            schema: None,
        }
    }

    pub fn structured(prompt: impl Into<String>, schema: ResponseSchema) -> Self {
        Self {
            prompt: prompt.into(),
            schema: Some(schema),
        }
    }

    pub fn is_structured(&self) -> bool {
        self.schema.is_some()
    }
}

/// Boundary to the text/JSON generation service.
///
/// Futures are not `Send`: the browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait GenerativeClient: Send + Sync {
    /// Run one generation call and return the raw reply text
    async fn complete(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
