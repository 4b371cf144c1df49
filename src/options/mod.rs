//! Flat option mappings and the type tags used to validate them.
//!
//! An [`Options`] mapping pairs string keys with JSON scalars. When used as a
//! defaults mapping, each value is both the fallback and the expected kind for
//! its key.
//!
//! # Example
//!
//! ```
//! use config_options::options::{OptionKind, Options};
//! use serde_json::json;
//!
//! let mut defaults = Options::new();
//! defaults.insert("port".to_string(), json!(8080));
//!
//! assert_eq!(OptionKind::of(defaults.get("port")), OptionKind::Number);
//! assert_eq!(OptionKind::of(defaults.get("host")), OptionKind::Missing);
//! ```

pub mod indent;

pub use indent::Indent;

use serde_json::Value;
use std::fmt;

/// Flat key to scalar mapping, kept in insertion order
pub type Options = serde_json::Map<String, Value>;

/// JSON type of an option value, or `Missing` when the key is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Missing,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl OptionKind {
    #[must_use]
    pub const fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value counts as blank when it is absent, `null` or the empty string.
#[must_use]
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of_scalars() {
        assert_eq!(OptionKind::of(Some(&json!("a"))), OptionKind::String);
        assert_eq!(OptionKind::of(Some(&json!(1.5))), OptionKind::Number);
        assert_eq!(OptionKind::of(Some(&json!(-3))), OptionKind::Number);
        assert_eq!(OptionKind::of(Some(&json!(false))), OptionKind::Boolean);
        assert_eq!(OptionKind::of(Some(&Value::Null)), OptionKind::Null);
        assert_eq!(OptionKind::of(None), OptionKind::Missing);
    }

    #[test]
    fn test_kind_of_non_scalars() {
        assert_eq!(OptionKind::of(Some(&json!([1, 2]))), OptionKind::Array);
        assert_eq!(OptionKind::of(Some(&json!({"a": 1}))), OptionKind::Object);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OptionKind::Boolean.to_string(), "boolean");
        assert_eq!(OptionKind::Missing.to_string(), "missing");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&Value::Null)));
        assert!(is_blank(Some(&json!(""))));
        assert!(!is_blank(Some(&json!(" "))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(false))));
    }
}
