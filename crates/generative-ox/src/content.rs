use serde::{Deserialize, Serialize};

/// Represents the producer of the content.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Content produced by the user.
    #[default]
    User,
    /// Content produced by the model.
    Model,
}

/// A fragment of a message. Only text fragments are modelled; other part kinds
/// in a response deserialize with `text` set to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

/// Multi-part content of a single message turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    /// Absent in some responses; always `user` in requests built by this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "crate::internal::null_as_default")]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: Role, parts: impl IntoIterator<Item = impl Into<Part>>) -> Self {
        Self {
            role: Some(role),
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// A `user` turn holding a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(Role::User, [Part::text(text)])
    }

    /// Text of the first part, if there is one and it is text.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.parts.first().and_then(Part::as_text)
    }

    pub fn text_parts(&self) -> impl Iterator<Item = &str> + '_ {
        self.parts.iter().filter_map(Part::as_text)
    }
}
