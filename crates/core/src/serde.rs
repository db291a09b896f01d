//! Serde helper functions for request deserialization.
//!
//! Browser forms and lax JSON clients send empty strings for fields they
//! leave blank; these helpers treat them as absent.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a checkbox-like flag: accepts booleans and the strings
/// `"true"`, `"on"`, `"complete"` (true) or `"false"`, `""` (false).
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => match s.trim() {
            "true" | "on" | "complete" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid flag value: {other:?}"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        redirect_to: Option<String>,
        #[serde(default, deserialize_with = "deserialize_flag")]
        remember: bool,
    }

    #[test]
    fn empty_string_is_none() {
        let p: Payload = serde_json::from_str(r#"{"redirect_to": "  "}"#).unwrap();
        assert_eq!(p.redirect_to, None);
    }

    #[test]
    fn present_string_is_kept() {
        let p: Payload = serde_json::from_str(r#"{"redirect_to": "/todos"}"#).unwrap();
        assert_eq!(p.redirect_to.as_deref(), Some("/todos"));
    }

    #[test]
    fn flag_accepts_bools_and_checkbox_strings() {
        let p: Payload = serde_json::from_str(r#"{"remember": true}"#).unwrap();
        assert!(p.remember);
        let p: Payload = serde_json::from_str(r#"{"remember": "on"}"#).unwrap();
        assert!(p.remember);
        let p: Payload = serde_json::from_str(r#"{"remember": ""}"#).unwrap();
        assert!(!p.remember);
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert!(!p.remember);
    }

    #[test]
    fn flag_rejects_garbage() {
        assert!(serde_json::from_str::<Payload>(r#"{"remember": "maybe"}"#).is_err());
    }
}
