use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Schema entry for one output property: `{"type": "<type>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub r#type: String,
}

/// Shape of the JSON object the model is asked to produce.
///
/// Serializes as `{"type": "object", "properties": {...}, "required": [...]}`.
/// `required` is kept verbatim, in order, and is not checked against the
/// declared properties; the API decides whether an unknown name is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSchema {
    #[serde(rename = "type", default = "object_type")]
    r#type: String,
    #[serde(default)]
    properties: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    required: Vec<String>,
}

fn object_type() -> String {
    "object".to_string()
}

impl Default for OutputSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSchema {
    #[must_use]
    pub fn new() -> Self {
        Self {
            r#type: object_type(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Builds a schema from a name → type mapping and a list of required names.
    ///
    /// A name repeated in `fields` keeps the last type given for it.
    pub fn from_parts<K, V, R>(
        fields: impl IntoIterator<Item = (K, V)>,
        required: impl IntoIterator<Item = R>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        let schema = fields
            .into_iter()
            .fold(Self::new(), |schema, (name, ty)| schema.field(name, ty));
        Self {
            required: required.into_iter().map(Into::into).collect(),
            ..schema
        }
    }

    /// Declares a property. `ty` is any JSON type name, e.g. `FieldType::String` or `"number"`.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.properties
            .insert(name.into(), PropertySchema { r#type: ty.into() });
        self
    }

    /// Marks a name as required. Duplicates and undeclared names are kept as given.
    #[must_use]
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, PropertySchema> {
        &self.properties
    }

    #[must_use]
    pub fn required_fields(&self) -> &[String] {
        &self.required
    }
}
