//! The tagged union over parsed JSON values and its lenient typed accessors.
//!
//! A [`Value`] is built once from a generic decoder's dynamic output and then
//! read through total accessors. Reading a value through the accessor of a
//! different variant yields that type's zero value instead of an error; this
//! silent degradation is a deliberate ergonomics contract that callers rely
//! on, so the accessors must never be changed to fail on mismatch.

use std::collections::BTreeMap;

/// Mapping type used for the object variant of [`Value`].
///
/// Key order carries no meaning; keys are unique.
pub type Map = BTreeMap<String, Value>;

/// The shared zero value returned by lookups that miss.
pub(crate) static NULL: Value = Value::Null;

static EMPTY_OBJECT: Map = BTreeMap::new();

/// One parsed JSON node.
///
/// Exactly one variant is active. Numbers are normalised to double precision
/// at construction, matching the decoding model of the underlying parser.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// JSON `null`, and the zero value produced by missed lookups.
    Null,
    /// A JSON boolean.
    Bool(bool),
    /// A JSON number, held as `f64` regardless of its lexical form.
    Number(f64),
    /// A JSON string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A mapping from unique string keys to values.
    Object(Map),
}

impl Value {
    /// Returns the child sequence, or an empty slice for any other variant.
    #[must_use]
    pub fn array(&self) -> &[Value] {
        match self {
            Self::Array(items) => items,
            _ => &[],
        }
    }

    /// Returns the string contents, or `""` for any other variant.
    #[must_use]
    pub fn string(&self) -> &str {
        match self {
            Self::String(text) => text,
            _ => "",
        }
    }

    /// Returns the numeric value, or `0.0` for any other variant.
    #[must_use]
    pub const fn number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            _ => 0.0,
        }
    }

    /// Returns the numeric value truncated toward zero, or `0` for any other
    /// variant.
    ///
    /// Truncation, not rounding: `5.3` and `5.9` both yield `5`, while `-5.9`
    /// yields `-5`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the documented accessor contract"
    )]
    pub const fn integer(&self) -> i64 {
        self.number() as i64
    }

    /// Returns the boolean, or `false` for any other variant.
    #[must_use]
    pub const fn boolean(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Returns the child mapping, or an empty mapping for any other variant.
    #[must_use]
    pub fn object(&self) -> &Map {
        match self {
            Self::Object(map) => map,
            _ => &EMPTY_OBJECT,
        }
    }

    /// Returns `true` when this is the null variant.
    ///
    /// Useful for telling a stored `null` apart from a genuinely absent key
    /// when the zero-value accessors are not discriminating enough.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<serde_json::Value> for Value {
    /// Classifies a dynamic decoder value into exactly one variant,
    /// recursively classifying every array element and object member.
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(members) => Self::Object(
                members
                    .into_iter()
                    .map(|(key, member)| (key, Self::from(member)))
                    .collect(),
            ),
        }
    }
}
