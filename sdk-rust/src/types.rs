use crate::QuoteResult;
use serde::{
    de::{Error as _, Unexpected},
    Deserialize, Serialize,
};
use serde_json::Value;

const PLACEHOLDER_TEXT: &str = "Knock, knock...";

/// A quote (or joke) as returned by the remote endpoint.
///
/// On the wire it is a JSON object `{"id": string, "quote": string,
/// "status": number}`. Two records with the same fields are equal and hash
/// the same, so a list of favorites can be checked for membership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct QuoteRecord {
    /// Opaque identifier assigned by the endpoint.
    id: String,
    /// The quote or joke body.
    #[serde(rename = "quote")]
    text: String,
    /// Status code reported by the endpoint. Passed through as-is.
    status: i64,
}

impl QuoteRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>, status: i64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            status,
        }
    }

    /// The record shown before the first quote has been fetched.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("", PLACEHOLDER_TEXT, 0)
    }

    /// Decode a record from a JSON response body.
    /// Fails with [`QuoteError::Decode`](crate::QuoteError::Decode) if the
    /// body is not a JSON object, a field is missing, or a field has the
    /// wrong type.
    pub fn from_json(body: &[u8]) -> QuoteResult<Self> {
        // The derived impl also accepts a sequence in field order; only keyed
        // objects are valid records.
        let value: Value = serde_json::from_slice(body)?;
        if value.is_object() {
            return Ok(serde_json::from_value(value)?);
        }

        let unexpected = match &value {
            Value::Array(_) => Unexpected::Seq,
            Value::String(s) => Unexpected::Str(s),
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Number(_) => Unexpected::Other("number"),
            Value::Null => Unexpected::Unit,
            Value::Object(_) => Unexpected::Map,
        };
        Err(serde_json::Error::invalid_type(unexpected, &"a JSON object").into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn status(&self) -> i64 {
        self.status
    }
}

impl Default for QuoteRecord {
    fn default() -> Self {
        Self::placeholder()
    }
}
