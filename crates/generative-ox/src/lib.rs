#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::pedantic, clippy::unwrap_used)]

//! Structured-output client for the Google generative-language API.
//!
//! A [`GenerativeClient`] is configured once and reused. Each call sends a
//! prompt together with the shape of the JSON object the model should answer
//! with, and returns the typed [`GenerateContentResponse`].
//!
//! ```rust,no_run
//! # use generative_ox::{GenerativeClient, Model};
//! # async fn run() -> Result<(), generative_ox::GenerativeError> {
//! let client = GenerativeClient::builder()
//!     .api_key("api-key-here")
//!     .model(Model::Gemini2ProExperimental)
//!     .temperature(0.7)
//!     .build()?;
//!
//! let response = client
//!     .send(
//!         "My daisies are wilting, what should I do?",
//!         [("solution_for_plant", "string"), ("thoughts", "string"), ("joke", "string")],
//!         ["solution_for_plant"],
//!     )
//!     .await?;
//!
//! println!("{:?}", response.response_text());
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error;
pub mod generate_content;
mod internal;
pub mod model;
pub mod schema;

pub use crate::content::{Content, Part, Role};
pub use crate::error::GenerativeError;
pub use crate::generate_content::request::GenerateContentRequest;
pub use crate::generate_content::response::{Candidate, GenerateContentResponse};
pub use crate::generate_content::usage::UsageMetadata;
pub use crate::generate_content::{DEFAULT_TEMPERATURE, GenerationConfig};
pub use crate::model::{FieldType, Model};
pub use crate::schema::{OutputSchema, PropertySchema};

use core::fmt;

use bon::bon;

use crate::internal::GenerativeRequestHelper;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Client for the `generateContent` endpoint.
///
/// Immutable once built; clone it or share it by reference across tasks.
#[derive(Clone)]
pub struct GenerativeClient {
    pub(crate) api_key: String,
    pub(crate) model: Model,
    pub(crate) temperature: f64,
    pub(crate) base_url: String,
    pub(crate) api_version: String,
    pub(crate) client: reqwest::Client,
}

#[bon]
impl GenerativeClient {
    /// Validates the configuration and builds the client.
    ///
    /// Only the API key is checked. Temperature range and model name are
    /// passed to the API as given.
    ///
    /// When no `client` is supplied, the HTTP client keeps no idle
    /// connections, so every call opens and releases its own.
    ///
    /// # Errors
    ///
    /// - `GenerativeError::MissingApiKey` if the API key is absent or empty.
    /// - `GenerativeError::ReqwestError` if the default HTTP client cannot be initialised.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: Option<String>,
        #[builder(default, into)] model: Model,
        #[builder(default = DEFAULT_TEMPERATURE)] temperature: f64,
        #[builder(default = DEFAULT_BASE_URL.to_string(), into)] base_url: String,
        #[builder(default = DEFAULT_API_VERSION.to_string(), into)] api_version: String,
        client: Option<reqwest::Client>,
    ) -> Result<Self, GenerativeError> {
        let api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(GenerativeError::MissingApiKey),
        };

        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .pool_max_idle_per_host(0)
                .build()?,
        };

        Ok(Self {
            api_key,
            model,
            temperature,
            base_url,
            api_version,
            client,
        })
    }
}

impl GenerativeClient {
    /// Shorthand for a client with the default model and temperature.
    ///
    /// # Errors
    ///
    /// Same as [`GenerativeClient::builder`]'s `build`.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, GenerativeError> {
        Self::builder().api_key(api_key).build()
    }

    /// Reads the API key from `GEMINI_API_KEY`, falling back to `GOOGLE_AI_API_KEY`
    /// when the first is unset or empty. `GEMINI_MODEL`, when set and non-empty,
    /// selects the model.
    ///
    /// # Errors
    ///
    /// Returns `GenerativeError::MissingApiKey` when neither variable holds a key.
    pub fn load_from_env() -> Result<Self, GenerativeError> {
        let lookup = |name: &str| std::env::var(name).ok();
        let api_key = first_non_empty(&["GEMINI_API_KEY", "GOOGLE_AI_API_KEY"], lookup);
        let model = first_non_empty(&["GEMINI_MODEL"], lookup).map(Model::from);

        Self::builder()
            .maybe_api_key(api_key)
            .maybe_model(model)
            .build()
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Asks the model for a JSON object with the given properties.
    ///
    /// `fields` maps output property names to JSON type names (`"string"`,
    /// `"number"`, or a [`FieldType`]). `required` is sent verbatim and in
    /// order; names missing from `fields` are not rejected here.
    ///
    /// # Errors
    ///
    /// - `GenerativeError::ReqwestError` on connection or transport failure.
    /// - `GenerativeError::InvalidRequestError` / `UnexpectedResponse` on a non-2xx status.
    /// - `GenerativeError::JsonDeserializationError` if a 2xx body is not a valid response.
    pub async fn send<K, V, R>(
        &self,
        input_text: impl Into<String>,
        fields: impl IntoIterator<Item = (K, V)>,
        required: impl IntoIterator<Item = R>,
    ) -> Result<GenerateContentResponse, GenerativeError>
    where
        K: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        let schema = OutputSchema::from_parts(fields, required);
        self.send_with_schema(input_text, schema).await
    }

    /// Like [`send`](Self::send), with a prebuilt [`OutputSchema`].
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_with_schema(
        &self,
        input_text: impl Into<String>,
        schema: OutputSchema,
    ) -> Result<GenerateContentResponse, GenerativeError> {
        let request = self.generate_content_request(input_text, schema);
        self.send_request(&request).await
    }

    /// Sends an already built request to this client's model.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    #[tracing::instrument(skip_all, fields(model = %self.model))]
    pub async fn send_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerativeError> {
        GenerativeRequestHelper::new(self)
            .send_generate_content_request(request)
            .await
    }
}

fn first_non_empty(
    names: &[&str],
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    names
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}

impl fmt::Debug for GenerativeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerativeClient")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}
