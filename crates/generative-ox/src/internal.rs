use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::{
    GenerativeClient, GenerativeError,
    error::parse_error_response,
    generate_content::{request::GenerateContentRequest, response::GenerateContentResponse},
};

/// Reads an explicit JSON `null` the same way as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Strips the request URL, which carries the API key, from transport errors.
fn redact(err: reqwest::Error) -> GenerativeError {
    GenerativeError::ReqwestError(err.without_url())
}

/// An API path relative to the client's base URL, e.g. `v1beta/models/gemini-2.0:generateContent`.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub path: String,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// Issues authenticated JSON requests on behalf of a [`GenerativeClient`].
///
/// The API key travels only as the `key` query parameter.
pub(crate) struct GenerativeRequestHelper<'a> {
    client: &'a GenerativeClient,
}

impl<'a> GenerativeRequestHelper<'a> {
    pub fn new(client: &'a GenerativeClient) -> Self {
        Self { client }
    }

    /// POSTs `body` as JSON and decodes a 2xx response body into `T`.
    pub async fn post_json<T, B>(&self, endpoint: &Endpoint, body: &B) -> Result<T, GenerativeError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload = serde_json::to_vec(body)?;

        let res = self
            .client
            .client
            .post(endpoint.url(&self.client.base_url))
            .query(&[("key", self.client.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(redact)?;

        let status = res.status();
        let bytes = res.bytes().await.map_err(redact)?;
        tracing::debug!(status = status.as_u16(), bytes = bytes.len(), path = %endpoint.path, "response received");

        if !status.is_success() {
            let err = parse_error_response(status, &bytes);
            tracing::warn!(status = status.as_u16(), error = %err, "request rejected");
            return Err(err);
        }

        serde_json::from_slice::<T>(&bytes).map_err(|source| {
            tracing::warn!(error = %source, "response body could not be decoded");
            GenerativeError::JsonDeserializationError {
                source,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }
        })
    }

    pub async fn send_generate_content_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerativeError> {
        let endpoint = Endpoint::new(format!(
            "{}/models/{}:generateContent",
            self.client.api_version, self.client.model
        ));
        tracing::debug!(
            path = %endpoint.path,
            properties = request.generation_config.response_schema.properties().len(),
            required = request.generation_config.response_schema.required_fields().len(),
            "sending generateContent request"
        );

        self.post_json(&endpoint, request).await
    }
}
