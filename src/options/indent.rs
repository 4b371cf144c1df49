use crate::error::{OptionsError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::{CompactFormatter, PrettyFormatter, Serializer};

/// Longest indentation unit, in spaces or characters
pub const MAX_INDENT: usize = 10;

/// Indentation used when serializing a config file.
///
/// Follows the `space` argument of JavaScript's `JSON.stringify`: a count of
/// spaces (capped at 10) or a literal string (first 10 characters). Zero or
/// an empty string gives compact single-line output, as does a negative or
/// fractional count below one.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(untagged)]
pub enum Indent {
    #[default]
    None,
    Spaces(usize),
    Text(String),
}

/// Accepted forms of `indent` in settings files
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Count(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let indent = match Option::<RawIndent>::deserialize(deserializer)? {
            None => Self::None,
            Some(RawIndent::Count(n)) if n >= 1.0 => {
                // Truncated like JSON.stringify, and capped before the cast
                Self::Spaces(n.min(MAX_INDENT as f64).trunc() as usize)
            }
            Some(RawIndent::Count(_)) => Self::None,
            Some(RawIndent::Text(s)) => Self::Text(s),
        };
        Ok(indent)
    }
}

impl Indent {
    /// The indentation unit written per nesting level, empty for compact output
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Spaces(n) => " ".repeat((*n).min(MAX_INDENT)),
            Self::Text(s) => s.chars().take(MAX_INDENT).collect(),
        }
    }

    /// Serialize a value to JSON text with this indentation
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let unit = self.unit();
        let mut buf = Vec::new();

        if unit.is_empty() {
            let mut ser = Serializer::with_formatter(&mut buf, CompactFormatter);
            value.serialize(&mut ser).map_err(OptionsError::Serialize)?;
        } else {
            let mut ser =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(unit.as_bytes()));
            value.serialize(&mut ser).map_err(OptionsError::Serialize)?;
        }

        String::from_utf8(buf).map_err(|e| {
            OptionsError::Serialize(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                e,
            )))
        })
    }
}

impl From<usize> for Indent {
    fn from(n: usize) -> Self {
        Self::Spaces(n)
    }
}

impl From<i64> for Indent {
    fn from(n: i64) -> Self {
        usize::try_from(n).map_or(Self::None, Self::Spaces)
    }
}

impl From<&str> for Indent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Indent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
