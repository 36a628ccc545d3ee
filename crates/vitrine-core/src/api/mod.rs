//! Client for the remote shop API.
//!
//! All operations are single-shot request/response: no retries, no
//! timeouts, no idempotency keys. Each call is awaited once and either
//! succeeds or surfaces an [`ApiError`].

mod auth;
mod products;

use std::fmt;

pub use auth::HealthReport;
pub use products::{NewProduct, Product};
use serde_json::Value;

use crate::config::Config;

/// Categories of API errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request did not complete (connect failure, transport error).
    Network,
    /// The server answered with a non-success status or an unreadable body.
    Server,
    /// Malformed user input, caught client-side before any request.
    Validation,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Server => write!(f, "server"),
            ApiErrorKind::Validation => write!(f, "validation"),
        }
    }
}

/// Structured error from the shop API with kind and details.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates a network error from a transport failure.
    pub fn network(err: &reqwest::Error) -> Self {
        Self::new(ApiErrorKind::Network, err.to_string())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    /// Creates a server error from an HTTP status and response body.
    ///
    /// The shop API wraps human-readable errors as `{"message": "..."}`;
    /// when present that message is surfaced instead of the bare status.
    pub fn http_status(status: u16, body: &str) -> Self {
        let message = format!("HTTP {status}");
        let details = if body.is_empty() {
            None
        } else {
            if let Ok(json) = serde_json::from_str::<Value>(body)
                && let Some(msg) = json.get("message").and_then(|v| v.as_str())
            {
                return Self {
                    kind: ApiErrorKind::Server,
                    message: msg.to_string(),
                    details: Some(body.to_string()),
                };
            }
            Some(body.to_string())
        };
        Self {
            kind: ApiErrorKind::Server,
            message,
            details,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for shop API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Parses user-entered price text into a non-negative decimal.
///
/// The TUI form and the CLI both route price input through here so the
/// number sent on the wire is always a parsed decimal, never the raw text.
pub fn parse_price(text: &str) -> ApiResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Price is required"));
    }
    let price: f64 = trimmed
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid price: '{trimmed}'")))?;
    if !price.is_finite() || price < 0.0 {
        return Err(ApiError::validation("Price must be non-negative"));
    }
    Ok(price)
}

/// Shop API client.
///
/// Holds a connection pool and the resolved base URL. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ShopClient {
    base_url: String,
    http: reqwest::Client,
}

impl ShopClient {
    /// Creates a client from configuration.
    ///
    /// Resolves the base URL once; VITRINE_API_URL overrides the config.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.effective_api_base_url())
    }

    /// Creates a client against an explicit base URL (tests, overrides).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Checks a response status and maps failures to [`ApiError`].
    ///
    /// Reads the body on error so `{"message": ...}` payloads surface.
    pub(crate) async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::http_status(status.as_u16(), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_decimal() {
        assert_eq!(parse_price("19.99").unwrap(), 19.99);
        assert_eq!(parse_price(" 5 ").unwrap(), 5.0);
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(
            parse_price("abc").unwrap_err().kind,
            ApiErrorKind::Validation
        );
        assert_eq!(parse_price("").unwrap_err().kind, ApiErrorKind::Validation);
        assert_eq!(
            parse_price("nan").unwrap_err().kind,
            ApiErrorKind::Validation
        );
    }

    #[test]
    fn test_parse_price_rejects_negative() {
        let err = parse_price("-1.50").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert!(err.message.contains("non-negative"));
    }

    #[test]
    fn test_http_status_extracts_message() {
        let err = ApiError::http_status(404, r#"{"message": "Product not found"}"#);
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, "Product not found");
        assert!(err.details.is_some());
    }

    #[test]
    fn test_http_status_without_json_body() {
        let err = ApiError::http_status(502, "Bad Gateway");
        assert_eq!(err.message, "HTTP 502");
        assert_eq!(err.details.as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ShopClient::with_base_url("http://localhost:5050/");
        assert_eq!(client.url("/api/products"), "http://localhost:5050/api/products");
    }
}
