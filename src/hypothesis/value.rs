//! Attribute tokens and the wildcard symbol

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface form of the wildcard token
pub const WILDCARD: &str = "?";

/// A single hypothesis slot: a concrete attribute token or the wildcard
///
/// Values are opaque comparable tokens taken straight from table cells;
/// equality is raw token equality with no coercion. The wildcard is the
/// identity element of generalization: it is more general than every value,
/// and no other generalization relation holds between two distinct tokens.
///
/// Serializes as a plain string, with the wildcard rendered as `"?"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeValue {
    /// Matches any value in this slot
    Wildcard,
    /// Matches exactly this token
    Literal(String),
}

impl AttributeValue {
    /// Whether this slot is the wildcard
    pub fn is_wildcard(&self) -> bool {
        matches!(self, AttributeValue::Wildcard)
    }

    /// Generality test: `self` is more general than or equal to `other`
    /// iff `self` is the wildcard or the tokens are equal
    pub fn is_more_general_or_equal(&self, other: &AttributeValue) -> bool {
        self.is_wildcard() || self == other
    }
}

impl From<String> for AttributeValue {
    fn from(token: String) -> Self {
        if token == WILDCARD {
            AttributeValue::Wildcard
        } else {
            AttributeValue::Literal(token)
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(token: &str) -> Self {
        AttributeValue::from(token.to_string())
    }
}

impl From<AttributeValue> for String {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Wildcard => WILDCARD.to_string(),
            AttributeValue::Literal(token) => token,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Wildcard => f.write_str(WILDCARD),
            AttributeValue::Literal(token) => f.write_str(token),
        }
    }
}
