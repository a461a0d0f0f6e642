use crate::constants::ID_SEPARATOR;
use crate::input::{trim_padding, RawInput};

/// Returns the trimmed first `/`-segment of `value` when it is a non-empty run
/// of ASCII digits.
#[must_use]
pub fn numeric_leading_id(value: &str) -> Option<&str> {
    let segment = trim_padding(value.split(ID_SEPARATOR).next().unwrap_or_default());
    if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
        Some(segment)
    } else {
        None
    }
}

/// Extracts the numeric account id from a composite `"<id>/<rest>"` string.
///
/// Returns an empty string for non-string input or when the leading segment is
/// not a plain digit run. The empty string is a normal outcome, not an error.
#[must_use]
pub fn extract_numeric_leading_id(input: &RawInput) -> String {
    let Some(text) = input.as_text() else {
        tracing::trace!(event = "numeric_id_non_string", "input is not a string");
        return String::new();
    };
    match numeric_leading_id(text) {
        Some(id) => id.to_string(),
        None => {
            tracing::trace!(
                event = "numeric_id_rejected",
                len = text.len(),
                "leading segment is not numeric"
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(value: &str) -> String {
        extract_numeric_leading_id(&RawInput::from(value))
    }

    #[test]
    fn takes_leading_segment() {
        assert_eq!(extract("12345/extra/stuff"), "12345");
        assert_eq!(extract("987654321/media/abc"), "987654321");
        assert_eq!(extract("12345"), "12345");
        assert_eq!(extract("  123/x"), "123");
        assert_eq!(extract("0042 /x"), "0042");
        assert_eq!(extract("\u{feff}123/x"), "123");
    }

    #[test]
    fn rejects_non_numeric_segments() {
        assert_eq!(extract("abc/123"), "");
        assert_eq!(extract("ig_987654321"), "");
        assert_eq!(extract(""), "");
        assert_eq!(extract("/123"), "");
        assert_eq!(extract("   /123"), "");
        assert_eq!(extract("+12/x"), "");
        assert_eq!(extract("-12/x"), "");
        assert_eq!(extract("1.5/x"), "");
        assert_eq!(extract("1 2/x"), "");
        assert_eq!(extract("١٢٣/x"), "");
    }

    #[test]
    fn non_string_input_yields_empty() {
        for value in [json!(123), json!(42), json!(null), json!({"id": "1/a"})] {
            assert_eq!(extract_numeric_leading_id(&RawInput::from(value)), "");
        }
        assert_eq!(extract_numeric_leading_id(&RawInput::Other), "");
    }

    #[test]
    fn narrowed_variant_borrows_from_input() {
        let raw = String::from(" 77/tail");
        assert_eq!(numeric_leading_id(&raw), Some("77"));
        assert_eq!(numeric_leading_id("x77"), None);
    }
}
