use bon::Builder;
use serde::Serialize;
use serde_json::Value;

use super::GenerationConfig;
use crate::{
    GenerativeClient, GenerativeError,
    content::Content,
    generate_content::response::GenerateContentResponse,
    schema::OutputSchema,
};

/// Body of a `models/{model}:generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[builder(field)]
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl<S: generate_content_request_builder::State> GenerateContentRequestBuilder<S> {
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.contents.push(content.into());
        self
    }

    /// Adds a `user` turn holding one text part.
    pub fn user_text(mut self, text: impl Into<String>) -> Self {
        self.contents.push(Content::user_text(text));
        self
    }
}

impl GenerateContentRequest {
    /// The exact JSON document sent on the wire.
    ///
    /// # Errors
    ///
    /// Returns `GenerativeError::SerdeError` if serialization fails. None of the
    /// request types can trigger this today. Non-finite sampling parameters do
    /// not fail: they are written as `null`.
    pub fn to_value(&self) -> Result<Value, GenerativeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Sends this request with `client`'s credentials and model.
    ///
    /// # Errors
    ///
    /// See [`GenerativeClient::send_request`].
    pub async fn send(
        &self,
        client: &GenerativeClient,
    ) -> Result<GenerateContentResponse, GenerativeError> {
        client.send_request(self).await
    }
}

impl GenerativeClient {
    /// Builds the request `send` would issue, without sending it.
    pub fn generate_content_request(
        &self,
        input_text: impl Into<String>,
        schema: OutputSchema,
    ) -> GenerateContentRequest {
        GenerateContentRequest::builder()
            .user_text(input_text)
            .generation_config(
                GenerationConfig::builder()
                    .temperature(self.temperature)
                    .response_schema(schema)
                    .build(),
            )
            .build()
    }
}
