use crate::{api_response::ApiResponse, error::Error};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

type ReqwestClient = reqwest::blocking::Client;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const API_KEY_PARAM: &str = "apikey";
const API_KEY_HEADER: &str = "X-ZAP-API-Key";

/// The invocation seam every generated binding delegates to. Bindings only
/// name the endpoint triple and hand over the flat payload; everything
/// about the wire (URL, key, parsing) lives behind this trait.
pub trait ApiCaller {
    fn call_api(
        &self,
        component: &str,
        category: &str,
        action: &str,
        params: &HashMap<String, String>,
    ) -> Result<ApiResponse, Error>;
}

/// Builder used to build a ClientApi instance.
#[derive(Debug, Clone, Default)]
pub struct ClientApiBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl ClientApiBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            http_client: None,
        }
    }

    /// Use the given base URL instead of the local proxy default.
    pub fn with_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Send the given API key with every request.
    pub fn with_api_key<T: Into<String>>(mut self, api_key: T) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Use a pre-configured blocking reqwest client.
    pub fn with_http_client(mut self, client: ReqwestClient) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(mut self) -> ClientApi {
        ClientApi {
            http: self.http_client.take().unwrap_or_default(),
            base_url: self
                .base_url
                .take()
                .unwrap_or_else(|| String::from(DEFAULT_BASE_URL)),
            api_key: self.api_key.take(),
        }
    }
}

/// Blocking client for the tool's HTTP API. Endpoints are addressed by a
/// (component, category, action) triple and take a flat string payload as
/// query parameters; replies come back as JSON.
#[derive(Debug, Clone)]
pub struct ClientApi {
    http: ReqwestClient,
    base_url: String,
    api_key: Option<String>,
}

impl ClientApi {
    /// Create a ClientApi against the local proxy default, without an API key.
    pub fn new() -> Self {
        ClientApiBuilder::new().build()
    }

    fn endpoint_url(&self, component: &str, category: &str, action: &str) -> String {
        format!(
            "{}/JSON/{}/{}/{}/",
            self.base_url.trim_end_matches('/'),
            component,
            category,
            action
        )
    }
}

impl Default for ClientApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiCaller for ClientApi {
    fn call_api(
        &self,
        component: &str,
        category: &str,
        action: &str,
        params: &HashMap<String, String>,
    ) -> Result<ApiResponse, Error> {
        let url = self.endpoint_url(component, category, action);
        let url = reqwest::Url::parse(&url).map_err(|_| Error::InvalidApiUrl)?;
        debug!("calling {} with {} parameter(s)", url, params.len());

        let mut request = self.http.get(url).query(params);
        if let Some(api_key) = &self.api_key {
            request = request
                .query(&[(API_KEY_PARAM, api_key.as_str())])
                .header(API_KEY_HEADER, api_key.as_str());
        }

        let body = request.send()?.error_for_status()?.text()?;
        parse_body(&body)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: String,
    message: String,
}

/// Parses a response body, mapping the server's error envelope
/// (`{"code": ..., "message": ...}`) to `Error::ApiError`.
fn parse_body(body: &str) -> Result<ApiResponse, Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("code").map_or(false, |c| c.is_string()) {
        if let Ok(envelope) = serde_json::from_value::<ErrorEnvelope>(value.clone()) {
            return Err(Error::ApiError {
                code: envelope.code,
                message: envelope.message,
            });
        }
    }

    Ok(ApiResponse::new(value))
}

#[cfg(test)]
mod tests {
    use super::{parse_body, ClientApi, ClientApiBuilder, DEFAULT_BASE_URL};
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn endpoint_url_joins_the_triple_under_the_json_prefix() {
        let api = ClientApiBuilder::new()
            .with_base_url("http://localhost:8090")
            .build();

        assert_eq!(
            api.endpoint_url("talon", "action", "scanGraphQLByURI"),
            "http://localhost:8090/JSON/talon/action/scanGraphQLByURI/"
        );
    }

    #[test]
    fn endpoint_url_tolerates_a_trailing_slash_on_the_base() {
        let api = ClientApiBuilder::new()
            .with_base_url("http://localhost:8090/")
            .build();

        assert_eq!(
            api.endpoint_url("talon", "action", "scanGraphQLByFile"),
            "http://localhost:8090/JSON/talon/action/scanGraphQLByFile/"
        );
    }

    #[test]
    fn builder_defaults_to_the_local_proxy() {
        let api = ClientApi::new();
        assert_eq!(api.base_url, DEFAULT_BASE_URL);
        assert!(api.api_key.is_none());
    }

    #[test]
    fn parse_body_passes_ordinary_replies_through() {
        let response = parse_body(r#"{"Result":"OK"}"#).unwrap();
        assert_eq!(response.string("Result"), Some("OK"));
    }

    #[test]
    fn parse_body_maps_the_error_envelope() {
        let result = parse_body(r#"{"code":"does_not_exist","message":"Does Not Exist"}"#);

        match result {
            Err(Error::ApiError { code, message }) => {
                assert_eq!(code, "does_not_exist");
                assert_eq!(message, "Does Not Exist");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn parse_body_does_not_mistake_data_for_an_envelope() {
        // "code" alone, or a non-string code, is ordinary data.
        let response = parse_body(r#"{"code":"abc"}"#).unwrap();
        assert_eq!(response.string("code"), Some("abc"));

        let response = parse_body(r#"{"code":200,"message":"hi"}"#).unwrap();
        assert_eq!(response.value(), &json!({"code": 200, "message": "hi"}));
    }

    #[test]
    fn parse_body_rejects_non_json() {
        match parse_body("<html>not json</html>") {
            Err(Error::JsonError(_)) => {}
            other => panic!("expected JsonError, got {:?}", other),
        }
    }
}
