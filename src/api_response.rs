use serde_json::Value;

/// A response returned by the remote API, kept verbatim as the JSON value
/// the server sent. The invocation layer never interprets it beyond error
/// envelope detection; callers pick out what they need.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(Value);

impl ApiResponse {
    pub(crate) fn new(value: Value) -> Self {
        ApiResponse(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Looks up a top-level string field, the shape most action replies
    /// have (e.g. `{"Result": "OK"}` or a scan identifier).
    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.0
    }
}

#[cfg(test)]
mod tests {
    use super::ApiResponse;
    use serde_json::json;

    #[test]
    fn string_returns_top_level_string_fields() {
        let response = ApiResponse::new(json!({ "Result": "OK", "count": 3 }));

        assert_eq!(response.string("Result"), Some("OK"));
        assert_eq!(response.string("count"), None);
        assert_eq!(response.string("missing"), None);
    }

    #[test]
    fn value_is_kept_verbatim() {
        let body = json!({ "scan": "1", "nested": { "a": [1, 2] } });
        let response = ApiResponse::new(body.clone());

        assert_eq!(response.value(), &body);
        assert_eq!(response.into_value(), body);
    }
}
