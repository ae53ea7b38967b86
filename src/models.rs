//! Request options and response data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Optional settings for a lookup request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOptions {
    /// Extra headers sent with the request.
    ///
    /// `User-Agent` is always replaced with [`USER_AGENT`](crate::USER_AGENT),
    /// whatever its casing here.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl LookupOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header, replacing any earlier entry with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Response returned by the throwaway.cloud API.
///
/// The body is kept as-is; fields this crate does not know about are still
/// available through [`LookupResult::get`] and [`LookupResult::fields`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupResult(Map<String, Value>);

impl LookupResult {
    /// Whether the API reports the request as successful.
    pub fn success(&self) -> Option<bool> {
        self.0.get("success").and_then(Value::as_bool)
    }

    /// Whether the subject is classified as disposable.
    pub fn is_disposable(&self) -> Option<bool> {
        self.0.get("isDisposable").and_then(Value::as_bool)
    }

    /// Look up any field of the response by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields of the response.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for LookupResult {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_exposes_known_and_unknown_fields() {
        let result: LookupResult = serde_json::from_value(json!({
            "success": true,
            "isDisposable": true,
            "provider": "mailinator.com",
        }))
        .unwrap();

        assert_eq!(result.success(), Some(true));
        assert_eq!(result.is_disposable(), Some(true));
        assert_eq!(result.get("provider"), Some(&json!("mailinator.com")));
        assert_eq!(result.fields().len(), 3);
    }

    #[test]
    fn missing_or_mistyped_fields_are_none() {
        let result: LookupResult =
            serde_json::from_value(json!({ "success": "yes" })).unwrap();
        assert_eq!(result.success(), None);
        assert_eq!(result.is_disposable(), None);
        assert_eq!(result.get("success"), Some(&json!("yes")));
    }

    #[test]
    fn result_serializes_verbatim() {
        let body = json!({ "success": false, "error": { "code": 7 } });
        let result: LookupResult = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), body);
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(serde_json::from_str::<LookupResult>("[true]").is_err());
        assert!(serde_json::from_str::<LookupResult>("\"ok\"").is_err());
        assert!(serde_json::from_str::<LookupResult>("null").is_err());
    }

    #[test]
    fn options_header_replaces_same_name() {
        let options = LookupOptions::new()
            .header("X-Test", "1")
            .header("X-Test", "2");
        assert_eq!(options.headers.len(), 1);
        assert_eq!(options.headers["X-Test"], "2");
    }

    #[test]
    fn options_deserialize_without_headers() {
        let options: LookupOptions = serde_json::from_str("{}").unwrap();
        assert!(options.headers.is_empty());
    }
}
