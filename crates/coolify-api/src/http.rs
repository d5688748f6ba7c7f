//! HTTP dispatch layer.
//!
//! Builds versioned URLs, attaches the bearer token, applies the client-side
//! throttle, and translates non-success statuses into [`HttpError`] values.
//! Every resource namespace funnels through this type.

use log::{debug, error, trace};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;

use crate::errors::{ApiError, HttpError, Result};
use crate::rate_limit::RateLimiter;

/// The only API version this client speaks.
pub(crate) const API_VERSION: &str = "v1";

/// Query parameters as borrowed key / owned value pairs.
pub(crate) type Query<'a> = [(&'a str, String)];

/// Join a base URL and an endpoint into a versioned API URL.
pub(crate) fn build_url(base_url: &str, endpoint: &str) -> String {
    // Only v1 exists, so the version check cannot fail here.
    build_versioned_url(base_url, endpoint, API_VERSION).expect("v1 is always supported")
}

/// As [`build_url`], but explicit about the API version.
pub(crate) fn build_versioned_url(
    base_url: &str,
    endpoint: &str,
    version: &str,
) -> Result<String> {
    if version != API_VERSION {
        return Err(ApiError::Config(format!(
            "Only API version '{API_VERSION}' is currently supported, got '{version}'"
        )));
    }
    Ok(format!(
        "{}/api/{}/{}",
        base_url.trim_end_matches('/'),
        version,
        endpoint.trim_start_matches('/')
    ))
}

/// Mask an API key down to its first and last four characters for logging.
/// Counts characters, not bytes, so multi-byte keys cannot split a boundary.
pub(crate) fn mask_key(key: &str) -> String {
    let len = key.chars().count();
    let head: String = key.chars().take(4).collect();
    let tail: String = if len > 8 {
        key.chars().skip(len - 4).collect()
    } else {
        String::new()
    };
    format!("{head}...{tail}")
}

/// HTTP client shared by all resource namespaces of one [`crate::CoolifyClient`].
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    limiter: RateLimiter,
}

impl HttpClient {
    pub(crate) fn new(
        client: Client,
        base_url: String,
        api_key: String,
        requests_per_second: f64,
    ) -> Self {
        debug!("Creating HTTP dispatch layer");
        debug!("  API Key: {}", mask_key(&api_key));
        debug!("  Base URL: {}", base_url);
        Self {
            client,
            base_url,
            api_key,
            limiter: RateLimiter::new(requests_per_second),
        }
    }

    pub(crate) async fn get(&self, endpoint: &str, query: &Query<'_>) -> Result<Value> {
        self.request(Method::GET, endpoint, query, None).await
    }

    pub(crate) async fn post(
        &self,
        endpoint: &str,
        query: &Query<'_>,
        body: Option<&Value>,
    ) -> Result<Value> {
        self.request(Method::POST, endpoint, query, body).await
    }

    pub(crate) async fn patch(
        &self,
        endpoint: &str,
        query: &Query<'_>,
        body: Option<&Value>,
    ) -> Result<Value> {
        self.request(Method::PATCH, endpoint, query, body).await
    }

    pub(crate) async fn delete(&self, endpoint: &str, query: &Query<'_>) -> Result<Value> {
        self.request(Method::DELETE, endpoint, query, None).await
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &Query<'_>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = build_url(&self.base_url, endpoint);

        debug!("HTTP {} request to: {}", method, url);
        trace!("  Authorization: Bearer {}", mask_key(&self.api_key));
        trace!("  Content-Type: application/json");
        if let Some(body) = body {
            trace!(
                "Request body: {}",
                serde_json::to_string_pretty(body).unwrap_or_else(|_| "Invalid JSON".to_string())
            );
        }

        self.limiter.acquire().await;

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} request to {} failed: {:?}", method, url, e);
            HttpError::Request(e)
        })?;

        self.handle_response(&method, &url, response).await
    }

    /// Parse a response body, mapping non-success statuses to typed errors.
    async fn handle_response(
        &self,
        method: &Method,
        url: &str,
        response: Response,
    ) -> Result<Value> {
        let status = response.status();
        let body = response.text().await.map_err(HttpError::Request)?;

        if status.is_success() {
            debug!(
                "{} request to {} succeeded with status {}",
                method, url, status
            );
            return Ok(parse_body(&body));
        }

        error!(
            "{} request to {} failed with status {}",
            method, url, status
        );
        debug!("Error response body: {}", body);
        Err(ApiError::Http(translate_status(status, url, &body)))
    }
}

/// Successful bodies are usually JSON, but a few endpoints (version, health)
/// answer in plain text. An empty body becomes `Null`, unparseable text is
/// passed through as a JSON string.
fn parse_body(body: &str) -> Value {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
}

/// Map a non-success status code to the matching error variant.
fn translate_status(status: StatusCode, url: &str, body: &str) -> HttpError {
    match status {
        StatusCode::UNAUTHORIZED => HttpError::AuthenticationFailed {
            message: body.to_string(),
        },
        StatusCode::FORBIDDEN => HttpError::PermissionDenied {
            message: body.to_string(),
        },
        StatusCode::NOT_FOUND => HttpError::NotFound {
            url: url.to_string(),
            message: body.to_string(),
        },
        StatusCode::UNPROCESSABLE_ENTITY => HttpError::Validation {
            message: validation_message(body),
        },
        StatusCode::TOO_MANY_REQUESTS => HttpError::RateLimited,
        _ if status.is_redirection() => HttpError::UnexpectedRedirect {
            status: status.as_u16(),
        },
        _ if status.is_server_error() => HttpError::Server {
            status: status.as_u16(),
            message: body.to_string(),
        },
        _ => HttpError::Unexpected {
            status: status.as_u16(),
            message: body.to_string(),
        },
    }
}

/// Flatten a 422 body into a readable message. Observed shapes: a `message`
/// field alone, or an `errors` field holding a list, a string, or a map of
/// field names to messages.
fn validation_message(body: &str) -> String {
    let Ok(data) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };
    match data {
        Value::Object(map) => {
            let mut message = map
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            match map.get("errors") {
                Some(Value::Array(items)) => {
                    message = items
                        .iter()
                        .map(|item| match item {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                }
                Some(Value::String(s)) => message = s.clone(),
                Some(Value::Object(fields)) => {
                    for (key, value) in fields {
                        message.push_str(&format!("\n\t{key}: {value}"));
                    }
                }
                _ => {}
            }
            message
        }
        Value::Array(items) => items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("\n\t"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::{CoolifyClient, CoolifyConfig};

    use super::*;

    fn dispatch_client(server: &MockServer) -> HttpClient {
        HttpClient::new(Client::new(), server.uri(), "test-key".to_string(), 0.0)
    }

    #[test]
    fn build_url_joins_base_and_endpoint() {
        assert_eq!(
            build_url("https://app.coolify.io", "applications"),
            "https://app.coolify.io/api/v1/applications"
        );
    }

    #[test]
    fn build_url_normalizes_slashes() {
        assert_eq!(
            build_url("https://app.coolify.io/", "/applications"),
            "https://app.coolify.io/api/v1/applications"
        );
    }

    #[test]
    fn unsupported_version_is_a_config_error() {
        let err = build_versioned_url("https://x", "applications", "v2").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn mask_key_hides_the_middle() {
        assert_eq!(mask_key("abcdefghijkl"), "abcd...ijkl");
        assert_eq!(mask_key("abc"), "abc...");
    }

    #[test]
    fn mask_key_handles_multibyte_keys() {
        assert_eq!(mask_key("ключ-секрет"), "ключ...крет");
        assert_eq!(mask_key("käy"), "käy...");
    }

    #[test]
    fn parse_body_handles_json_text_and_empty() {
        assert_eq!(parse_body(r#"{"uuid": "a"}"#)["uuid"], "a");
        assert_eq!(parse_body("v4.0.0"), Value::String("v4.0.0".to_string()));
        assert_eq!(parse_body("   "), Value::Null);
    }

    #[test]
    fn status_401_maps_to_authentication_failed() {
        let err = translate_status(StatusCode::UNAUTHORIZED, "u", "denied");
        assert!(matches!(err, HttpError::AuthenticationFailed { .. }));
    }

    #[test]
    fn status_404_carries_the_url() {
        let err = translate_status(StatusCode::NOT_FOUND, "https://x/api/v1/a", "");
        match err {
            HttpError::NotFound { url, .. } => assert_eq!(url, "https://x/api/v1/a"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn status_429_maps_to_rate_limited() {
        let err = translate_status(StatusCode::TOO_MANY_REQUESTS, "u", "");
        assert!(matches!(err, HttpError::RateLimited));
    }

    #[test]
    fn redirects_are_rejected() {
        let err = translate_status(StatusCode::FOUND, "u", "");
        assert!(matches!(
            err,
            HttpError::UnexpectedRedirect { status: 302 }
        ));
    }

    #[test]
    fn server_errors_keep_status_and_body() {
        let err = translate_status(StatusCode::BAD_GATEWAY, "u", "upstream down");
        match err {
            HttpError::Server { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validation_message_from_errors_list() {
        let body = r#"{"message": "The given data was invalid.", "errors": ["name required", "ip invalid"]}"#;
        assert_eq!(validation_message(body), "name required, ip invalid");
    }

    #[test]
    fn validation_message_from_errors_map() {
        let body = r#"{"message": "Invalid.", "errors": {"name": "required"}}"#;
        let message = validation_message(body);
        assert!(message.starts_with("Invalid."));
        assert!(message.contains("name"));
    }

    #[test]
    fn validation_message_from_plain_message() {
        let body = r#"{"message": "uuid must be a string"}"#;
        assert_eq!(validation_message(body), "uuid must be a string");
    }

    #[test]
    fn validation_message_falls_back_to_raw_body() {
        assert_eq!(validation_message("not json"), "not json");
    }

    #[tokio::test]
    async fn requests_carry_bearer_token_and_json_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications"))
            .and(header("Authorization", "Bearer test-key"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let http = dispatch_client(&server);
        let value = http.get("applications", &[]).await.unwrap();
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn query_parameters_are_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications/app-1/start"))
            .and(query_param("force", "true"))
            .and(query_param("instant_deploy", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "queued"})))
            .expect(1)
            .mount(&server)
            .await;

        let http = dispatch_client(&server);
        let query = [
            ("force", "true".to_string()),
            ("instant_deploy", "false".to_string()),
        ];
        let value = http.get("applications/app-1/start", &query).await.unwrap();
        assert_eq!(value["message"], "queued");
    }

    #[tokio::test]
    async fn not_found_response_surfaces_as_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Application not found."
            })))
            .mount(&server)
            .await;

        let http = dispatch_client(&server);
        let err = http.get("applications/missing", &[]).await.unwrap_err();
        match err {
            ApiError::Http(HttpError::NotFound { url, .. }) => {
                assert!(url.ends_with("/api/v1/applications/missing"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn validation_response_surfaces_flattened_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/projects"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "The given data was invalid.",
                "errors": ["name required"]
            })))
            .mount(&server)
            .await;

        let http = dispatch_client(&server);
        let err = http
            .post("projects", &[], Some(&json!({})))
            .await
            .unwrap_err();
        match err {
            ApiError::Http(HttpError::Validation { message }) => {
                assert_eq!(message, "name required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn plain_text_success_body_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/version"))
            .respond_with(ResponseTemplate::new(200).set_body_string("v4.0.0"))
            .mount(&server)
            .await;

        let http = dispatch_client(&server);
        let value = http.get("version", &[]).await.unwrap();
        assert_eq!(value, Value::String("v4.0.0".to_string()));
    }

    #[tokio::test]
    async fn namespaces_of_one_client_share_the_throttle() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/servers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let mut config = CoolifyConfig::with_base_url("test-key", server.uri());
        config.requests_per_second = 5.0;
        let client = CoolifyClient::new(config).unwrap();

        let start = Instant::now();
        client.applications.list().await.unwrap();
        client.servers.list().await.unwrap();
        // The second request goes out no earlier than one interval (200ms)
        // after the first one was admitted.
        assert!(start.elapsed() >= Duration::from_millis(200));
    }
}
