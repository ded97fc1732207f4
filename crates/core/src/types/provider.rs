//! Provider attribution for stocked products.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Who supplies a product.
///
/// Stored data carries two shapes for the same column: a plain supplier
/// name, or an open bag of attributes (contact details, delivery days,
/// whatever the bar manager typed in). Both round-trip through the same
/// JSONB column unchanged.
///
/// ## Examples
///
/// ```
/// use barback_core::Provider;
///
/// let name: Provider = serde_json::from_str(r#""Distribuidora S.A.""#).unwrap();
/// assert_eq!(name.display_name(), Some("Distribuidora S.A."));
///
/// let info: Provider =
///     serde_json::from_str(r#"{"name": "Keiko", "phone": "+34 600 000 000"}"#).unwrap();
/// assert_eq!(info.display_name(), Some("Keiko"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Provider {
    /// Plain supplier name.
    Name(String),
    /// Open attribute bag.
    Info(Map<String, Value>),
}

impl Provider {
    /// The supplier's display name, when one can be derived.
    ///
    /// For the attribute-bag form this looks up a string `name` key.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Info(attrs) => attrs.get("name").and_then(Value::as_str),
        }
    }
}

impl From<&str> for Provider {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}
