use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::usage::UsageMetadata;
use crate::content::Content;

/// One alternative generated by the model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Kept as the raw string the API sends (`STOP`, `MAX_TOKENS`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl Candidate {
    /// Text of the first part of this candidate's content.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().and_then(Content::first_text)
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<&str> {
        self.finish_reason.as_deref()
    }
}

/// Response of a `generateContent` call.
///
/// Every field is optional on the wire. Unknown fields are ignored so that
/// additions to the API do not break parsing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default, deserialize_with = "crate::internal::null_as_default")]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    #[must_use]
    pub fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// `candidates[0].content.parts[0].text`, or `None` wherever that path breaks.
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        self.first_candidate().and_then(Candidate::text)
    }

    /// Parses [`response_text`](Self::response_text) as JSON into `T`.
    ///
    /// Returns `Ok(None)` when the response carries no text.
    ///
    /// # Errors
    ///
    /// Returns the decoding error when the text is not valid JSON for `T`.
    pub fn output<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.response_text().map(serde_json::from_str).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_response_text_follows_first_candidate() {
        let resp = response(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other" }] } }
            ]
        }));
        assert_eq!(resp.response_text(), Some("first"));
    }

    #[test]
    fn test_response_text_absent_paths() {
        assert_eq!(response(json!({})).response_text(), None);
        assert_eq!(response(json!({ "candidates": [] })).response_text(), None);
        assert_eq!(response(json!({ "candidates": [{}] })).response_text(), None);
        assert_eq!(
            response(json!({ "candidates": [{ "content": {} }] })).response_text(),
            None
        );
        assert_eq!(
            response(json!({ "candidates": [{ "content": { "parts": [] } }] })).response_text(),
            None
        );
    }

    #[test]
    fn test_candidate_accessors() {
        let candidate: Candidate = serde_json::from_value(json!({
            "content": { "parts": [{ "text": "x" }], "role": "model" },
            "finishReason": "MAX_TOKENS"
        }))
        .unwrap();
        assert_eq!(candidate.text(), Some("x"));
        assert_eq!(candidate.finish_reason(), Some("MAX_TOKENS"));
        assert_eq!(Candidate::default().text(), None);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct PlantAdvice {
        solution_for_plant: String,
        joke: Option<String>,
    }

    #[test]
    fn test_output_parses_structured_text() {
        let resp = response(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"solution_for_plant\":\"water it\"}" }] }
            }]
        }));
        let advice: Option<PlantAdvice> = resp.output().unwrap();
        assert_eq!(
            advice,
            Some(PlantAdvice {
                solution_for_plant: "water it".to_string(),
                joke: None,
            })
        );
    }

    #[test]
    fn test_output_absent_and_invalid() {
        let empty = response(json!({ "candidates": [] }));
        assert_eq!(empty.output::<PlantAdvice>().unwrap(), None);

        let prose = response(json!({
            "candidates": [{ "content": { "parts": [{ "text": "not json" }] } }]
        }));
        assert!(prose.output::<PlantAdvice>().is_err());
    }
}
