use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::schema::OutputSchema;

pub mod request;
pub mod response;
pub mod usage;

/// Sampling temperature used when the client is built without one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const MAX_OUTPUT_TOKENS: u32 = 8192;
pub const TOP_K: u32 = 64;
pub const TOP_P: f64 = 0.95;
/// Structured output is always requested as JSON.
pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// The `generationConfig` block of a request.
///
/// Only `temperature` and `response_schema` vary between calls; the remaining
/// members default to the fixed values the client always sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    #[builder(default = MAX_OUTPUT_TOKENS)]
    pub max_output_tokens: u32,
    #[builder(default = TOP_K)]
    pub top_k: u32,
    #[builder(default = TOP_P)]
    pub top_p: f64,
    #[builder(default = RESPONSE_MIME_TYPE.to_string(), into)]
    pub response_mime_type: String,
    #[builder(default)]
    pub response_schema: OutputSchema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::builder().build();

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "temperature": 0.7,
                "maxOutputTokens": 8192,
                "topK": 64,
                "topP": 0.95,
                "responseMimeType": "application/json",
                "responseSchema": { "type": "object", "properties": {}, "required": [] }
            })
        );
    }

    #[test]
    fn test_temperature_is_sent_unchanged() {
        let config = GenerationConfig::builder().temperature(0.123_456_789).build();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["temperature"].as_f64(), Some(0.123_456_789));
    }
}
