//! GraphQL response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{"data": ..., "errors": ...}` envelope returned by the query
/// endpoint. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Value>,
}

impl QueryResponse {
    /// Envelope carrying only data.
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Application-level errors reported by the target, if any.
    ///
    /// These never abort a run; callers log them and keep going with
    /// whatever [`data`](Self::data) is present.
    pub fn application_errors(&self) -> Option<&Value> {
        match &self.errors {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) if items.is_empty() => None,
            Some(errors) => Some(errors),
        }
    }

    /// Number of reported application errors. A non-array `errors` value
    /// counts as one.
    pub fn error_count(&self) -> usize {
        match self.application_errors() {
            None => 0,
            Some(Value::Array(items)) => items.len(),
            Some(_) => 1,
        }
    }

    /// `data.<field>` as an array, or empty when absent or not an array.
    pub fn data_list(&self, field: &str) -> &[Value] {
        self.data
            .as_ref()
            .and_then(|data| data.get(field))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_data_only() {
        let response: QueryResponse =
            serde_json::from_value(json!({"data": {"Agent": [{"uuid": "a"}]}})).unwrap();
        assert!(response.application_errors().is_none());
        assert_eq!(response.error_count(), 0);
        assert_eq!(response.data_list("Agent").len(), 1);
    }

    #[test]
    fn test_parse_errors_with_partial_data() {
        let response: QueryResponse = serde_json::from_value(json!({
            "data": {"Agent": []},
            "errors": [{"message": "field 'phone' not found"}]
        }))
        .unwrap();
        assert_eq!(response.error_count(), 1);
        assert!(response.data_list("Agent").is_empty());
    }

    #[test]
    fn test_parse_empty_envelope() {
        let response: QueryResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.data.is_none());
        assert!(response.data_list("Agent").is_empty());
    }

    #[test]
    fn test_null_and_empty_errors_ignored() {
        let response: QueryResponse =
            serde_json::from_value(json!({"data": null, "errors": null})).unwrap();
        assert!(response.application_errors().is_none());

        let response: QueryResponse = serde_json::from_value(json!({"errors": []})).unwrap();
        assert!(response.application_errors().is_none());
    }

    #[test]
    fn test_data_list_wrong_type() {
        let response = QueryResponse::with_data(json!({"Agent": {"uuid": "a"}}));
        assert!(response.data_list("Agent").is_empty());
        assert!(response.data_list("Estate").is_empty());
    }
}
