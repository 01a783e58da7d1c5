use core::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Model identifiers accepted by the `generateContent` endpoint.
///
/// The identifier is inserted into the request path verbatim, so any model the
/// API knows about can be used through [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Model {
    // --- Gemini 2.0 Series ---
    #[default]
    #[serde(rename = "gemini-2.0")]
    Gemini2,
    #[serde(rename = "gemini-2.0-flash")]
    Gemini2Flash,
    #[serde(rename = "gemini-2.0-flash-lite-preview-02-05")]
    Gemini2FlashLitePreview, // Preview
    #[serde(rename = "gemini-2.0-pro-exp-02-05")]
    Gemini2ProExperimental, // Experimental

    // --- Gemini 2.5 Series ---
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
    #[serde(rename = "gemini-2.5-flash-lite")]
    Gemini25FlashLite,
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,

    /// Any identifier not listed above.
    #[serde(untagged)]
    Custom(String),
}

impl Model {
    /// The identifier as it appears in the request path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini2 => "gemini-2.0",
            Model::Gemini2Flash => "gemini-2.0-flash",
            Model::Gemini2FlashLitePreview => "gemini-2.0-flash-lite-preview-02-05",
            Model::Gemini2ProExperimental => "gemini-2.0-pro-exp-02-05",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Custom(s) => s,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Model {
    fn known(s: &str) -> Option<Self> {
        let model = match s {
            "gemini-2.0" => Model::Gemini2,
            "gemini-2.0-flash" => Model::Gemini2Flash,
            "gemini-2.0-flash-lite-preview-02-05" => Model::Gemini2FlashLitePreview,
            "gemini-2.0-pro-exp-02-05" => Model::Gemini2ProExperimental,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            _ => return None,
        };
        Some(model)
    }
}

/// Never fails: unknown identifiers become [`Model::Custom`].
impl FromStr for Model {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Model::known(&s).unwrap_or(Model::Custom(s))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::known(s).unwrap_or_else(|| Model::Custom(s.to_string()))
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.as_str().to_string()
    }
}

/// Primitive JSON types a structured-output property can declare.
///
/// Anything convertible into a `String` is accepted where a type name is
/// expected; this enum only names the common ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        <&'static str>::from(ty).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_models_round_trip_through_strings() {
        let model: Model = "gemini-2.0-pro-exp-02-05".into();
        assert_eq!(model, Model::Gemini2ProExperimental);
        assert_eq!(model.as_str(), "gemini-2.0-pro-exp-02-05");
        assert_eq!(Model::Gemini2FlashLitePreview.to_string(), "gemini-2.0-flash-lite-preview-02-05");
    }

    #[test]
    fn test_model_parses_from_str() {
        assert_eq!("gemini-2.5-pro".parse::<Model>(), Ok(Model::Gemini25Pro));
        assert_eq!(
            "gemini-2.5-flash-lite".parse::<Model>(),
            Ok(Model::Gemini25FlashLite)
        );
        assert_eq!(
            "gemini-3.0-ultra".parse::<Model>(),
            Ok(Model::Custom("gemini-3.0-ultra".to_string()))
        );
        assert_eq!(
            Model::from("gemini-2.0-flash".to_string()),
            Model::Gemini2Flash
        );
    }

    #[test]
    fn test_every_known_model_maps_back_to_itself() {
        for model in [
            Model::Gemini2,
            Model::Gemini2Flash,
            Model::Gemini2FlashLitePreview,
            Model::Gemini2ProExperimental,
            Model::Gemini25Flash,
            Model::Gemini25FlashLite,
            Model::Gemini25Pro,
        ] {
            assert_eq!(Model::from(model.as_str()), model);
        }
    }

    #[test]
    fn test_default_model_is_gemini_2() {
        assert_eq!(Model::default(), Model::Gemini2);
        assert_eq!(Model::default().as_str(), "gemini-2.0");
    }

    #[test]
    fn test_unknown_model_is_kept_verbatim() {
        let model: Model = "my-tuned-model-007".into();
        assert!(matches!(model, Model::Custom(ref s) if s == "my-tuned-model-007"));
        assert_eq!(model.as_str(), "my-tuned-model-007");
        assert_eq!(String::from(model), "my-tuned-model-007");
    }

    #[test]
    fn test_model_serde_uses_identifier() {
        let json = serde_json::to_string(&Model::Gemini25Flash).unwrap();
        assert_eq!(json, "\"gemini-2.5-flash\"");

        let custom: Model = serde_json::from_str("\"gemini-exp-1206\"").unwrap();
        assert_eq!(custom, Model::Custom("gemini-exp-1206".to_string()));
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(String::from(FieldType::String), "string");
        assert_eq!(String::from(FieldType::Number), "number");
        assert_eq!(FieldType::Boolean.to_string(), "boolean");
        assert_eq!("integer".parse::<FieldType>().unwrap(), FieldType::Integer);
    }
}
