use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use serde_json::Value;
use thiserror::Error;

/// Error body returned by Google APIs on non-2xx responses.
#[derive(Debug, Deserialize)]
struct GoogleApiErrorPayload {
    error: GoogleApiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct GoogleApiErrorDetails {
    code: Option<i32>,
    message: String,
    status: Option<String>,
    details: Option<Value>,
}

#[derive(Debug, Error)]
pub enum GenerativeError {
    /// The client was built without an API key, or with an empty one.
    #[error("API key is required")]
    MissingApiKey,

    /// Errors from the HTTP client: connection failures, TLS, body reads.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// The request body could not be serialized.
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    /// A 2xx response whose body is not a valid `generateContent` response.
    #[error("Failed to deserialize JSON: {source}")]
    JsonDeserializationError {
        source: serde_json::Error,
        body: String,
    },

    /// A non-2xx response carrying a structured Google API error.
    #[error("Invalid request error (HTTP {http_status}): {message}")]
    InvalidRequestError {
        http_status: u16,
        code: Option<String>,
        message: String,
        status: Option<String>,
        details: Value,
    },

    /// A non-2xx response with any other body.
    #[error("Unexpected response from API (HTTP {http_status}): {body}")]
    UnexpectedResponse { http_status: u16, body: String },
}

impl GenerativeError {
    /// `true` for errors raised while building the client.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerativeError::MissingApiKey)
    }

    /// `true` for errors raised while sending a request or reading its response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !self.is_configuration()
    }

    /// HTTP status of the failed response, if the error came from one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerativeError::InvalidRequestError { http_status, .. }
            | GenerativeError::UnexpectedResponse { http_status, .. } => Some(*http_status),
            GenerativeError::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl Serialize for GenerativeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            GenerativeError::MissingApiKey => {
                let mut state = serializer.serialize_struct("GenerativeError", 1)?;
                state.serialize_field("type", "MissingApiKey")?;
                state.end()
            }
            GenerativeError::ReqwestError(e) => {
                let mut state = serializer.serialize_struct("GenerativeError", 2)?;
                state.serialize_field("type", "ReqwestError")?;
                state.serialize_field("error", &e.to_string())?;
                state.end()
            }
            GenerativeError::SerdeError(e) => {
                let mut state = serializer.serialize_struct("GenerativeError", 2)?;
                state.serialize_field("type", "SerdeError")?;
                state.serialize_field("error", &e.to_string())?;
                state.end()
            }
            GenerativeError::JsonDeserializationError { source, body } => {
                let mut state = serializer.serialize_struct("GenerativeError", 3)?;
                state.serialize_field("type", "JsonDeserializationError")?;
                state.serialize_field("error", &source.to_string())?;
                state.serialize_field("body", body)?;
                state.end()
            }
            GenerativeError::InvalidRequestError {
                http_status,
                code,
                message,
                status,
                details,
            } => {
                let field_count = 1 // type
                    + 1 // http_status
                    + usize::from(code.is_some())
                    + 1 // message
                    + usize::from(status.is_some())
                    + 1; // details
                let mut state = serializer.serialize_struct("GenerativeError", field_count)?;
                state.serialize_field("type", "InvalidRequestError")?;
                state.serialize_field("http_status", http_status)?;
                if let Some(c) = code {
                    state.serialize_field("code", c)?;
                }
                state.serialize_field("message", message)?;
                if let Some(s) = status {
                    state.serialize_field("status", s)?;
                }
                state.serialize_field("details", details)?;
                state.end()
            }
            GenerativeError::UnexpectedResponse { http_status, body } => {
                let mut state = serializer.serialize_struct("GenerativeError", 3)?;
                state.serialize_field("type", "UnexpectedResponse")?;
                state.serialize_field("http_status", http_status)?;
                state.serialize_field("body", body)?;
                state.end()
            }
        }
    }
}

/// Turns a non-2xx response into an error.
///
/// Structured Google errors keep their message and status string; anything
/// else is reported with the raw body text.
pub(crate) fn parse_error_response(
    status: reqwest::StatusCode,
    bytes: &bytes::Bytes,
) -> GenerativeError {
    if let Ok(payload) = serde_json::from_slice::<GoogleApiErrorPayload>(bytes) {
        GenerativeError::InvalidRequestError {
            http_status: status.as_u16(),
            code: payload.error.code.map(|c| c.to_string()),
            message: payload.error.message,
            status: payload.error.status,
            details: payload.error.details.unwrap_or(Value::Null),
        }
    } else {
        GenerativeError::UnexpectedResponse {
            http_status: status.as_u16(),
            body: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}
