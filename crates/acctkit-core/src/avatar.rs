use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{AVATAR_URL_FIELD, PROFILE_IMAGE_URL_FIELD};
use crate::input::trim_padding;

/// Loosely-typed avatar fields as they arrive from a profile payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarCandidates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Value>,
    // Never consulted by `select_avatar_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<Value>,
}

impl AvatarCandidates {
    /// Reads the recognized fields out of an arbitrary JSON document.
    ///
    /// Anything other than an object yields an empty record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };
        let field = |name: &str| map.get(name).filter(|value| !value.is_null()).cloned();
        Self {
            avatar_url: field(AVATAR_URL_FIELD),
            profile_image_url: field(PROFILE_IMAGE_URL_FIELD),
        }
    }
}

/// Picks the trimmed primary avatar URL, or `None` when it is missing, not a
/// string, or blank. The secondary field is ignored.
#[must_use]
pub fn select_avatar_url(input: Option<&AvatarCandidates>) -> Option<String> {
    let candidate = trim_padding(
        input
            .and_then(|record| record.avatar_url.as_ref())
            .and_then(Value::as_str)
            .unwrap_or_default(),
    );
    if candidate.is_empty() {
        tracing::trace!(event = "avatar_url_missing", "no usable avatar url");
        return None;
    }
    Some(candidate.to_string())
}
