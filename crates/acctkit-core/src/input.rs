use serde_json::Value;

use crate::error::InputError;

/// Value of unknown origin handed to an extractor.
///
/// The string/non-string decision is made once, when the value is converted
/// into a `RawInput`; extractors only ever look at the `Text` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Text(String),
    Other,
}

impl RawInput {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other => None,
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            _ => Self::Other,
        }
    }
}

impl From<&Value> for RawInput {
    fn from(value: &Value) -> Self {
        match value.as_str() {
            Some(text) => Self::Text(text.to_string()),
            None => Self::Other,
        }
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Other, Into::into)
    }
}

pub fn parse_json_input(text: &str) -> Result<Value, InputError> {
    Ok(serde_json::from_str(text)?)
}

/// Strips surrounding whitespace, including a byte order mark.
pub(crate) fn trim_padding(value: &str) -> &str {
    value.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_strings_become_text() {
        assert_eq!(
            RawInput::from(json!("12/x")),
            RawInput::Text("12/x".to_string())
        );
        assert_eq!(
            RawInput::from(&json!("")),
            RawInput::Text(String::new())
        );
    }

    #[test]
    fn non_string_json_is_other() {
        for value in [json!(123), json!(null), json!({}), json!([1]), json!(true)] {
            assert_eq!(RawInput::from(&value), RawInput::Other);
            assert_eq!(RawInput::from(value), RawInput::Other);
        }
    }

    #[test]
    fn missing_value_is_other() {
        assert_eq!(RawInput::from(None::<&str>), RawInput::Other);
        assert_eq!(
            RawInput::from(Some("7")),
            RawInput::Text("7".to_string())
        );
    }

    #[test]
    fn parse_json_input_rejects_malformed_text() {
        assert_eq!(
            RawInput::from(parse_json_input("\"42/a\"").expect("valid json")),
            RawInput::Text("42/a".to_string())
        );
        assert!(matches!(
            parse_json_input("{not json"),
            Err(InputError::InvalidJson(_))
        ));
    }

    #[test]
    fn trim_padding_strips_byte_order_mark() {
        assert_eq!(trim_padding("\u{feff} 123 \u{feff}"), "123");
        assert_eq!(trim_padding("\t\n"), "");
        assert_eq!(trim_padding("a\u{feff}b"), "a\u{feff}b");
    }
}
