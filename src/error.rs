//! Error types for the Robinhood API client.
//!
//! The taxonomy distinguishes transport failures, structured API errors,
//! malformed error bodies, and success-path decode mismatches so callers can
//! always tell whose contract was broken.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::client::RobinhoodClient;

/// A specialized `Result` type for Robinhood operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Robinhood API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connection, TLS, timeout). Propagated
    /// unmodified; the core has no retry logic.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the destination shape.
    /// This is a caller/schema mismatch, not an API error.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing failed while building a request.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The API rejected the request and returned a decodable error body.
    #[error("{0}")]
    Api(ErrorMap),

    /// Non-2xx response whose body could not be decoded as an [`ErrorMap`].
    /// The raw status line and body text are preserved for diagnosis.
    #[error("got response {status:?} and could not decode error body {body:?}")]
    BadResponse {
        /// The HTTP status line, e.g. `500 Internal Server Error`.
        status: String,
        /// The raw, unparsed response body.
        body: String,
    },

    /// Token exchange or credential resolution failed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Invalid input supplied to a request option or builder.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A symbol lookup returned no matching instrument.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Client construction failed (bad configuration value). Fatal; no
    /// partial client is usable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The client was constructed but its initial account listing failed.
    /// The fully usable client is recoverable via [`Error::into_client`];
    /// only the cached primary account is missing.
    #[error("initial account listing failed: {source}")]
    Bootstrap {
        /// The constructed, usable client.
        client: Box<RobinhoodClient>,
        /// The listing failure.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Return the structured API error map, if this is an API error.
    pub fn api_errors(&self) -> Option<&ErrorMap> {
        match self {
            Error::Api(map) => Some(map),
            _ => None,
        }
    }

    /// Recover the usable client from a [`Error::Bootstrap`] failure.
    pub fn into_client(self) -> Option<RobinhoodClient> {
        match self {
            Error::Bootstrap { client, .. } => Some(*client),
            _ => None,
        }
    }

    /// Returns `true` if this error is authentication-related.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }
}

/// The helpful per-field error messages returned by the API server.
///
/// The server's error bodies are JSON objects mapping a diagnostic key to an
/// arbitrary value whose shape the server controls. Every entry is rendered
/// into the error message so the failure is diagnosable without knowing the
/// server's schema in advance. Keys render in lexicographic order, which is
/// stable but not necessarily the server's order.
///
/// One `ErrorMap` is constructed per failed dispatch; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, Value>);

impl ErrorMap {
    /// Look up a diagnostic value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterate over all diagnostic entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of diagnostic entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the server returned no diagnostic entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // serde_json's Display quotes strings and renders nested values as
        // compact JSON, so any value shape stays readable.
        let entries: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "Error returned from API: {}", entries.join(", "))
    }
}

impl std::error::Error for ErrorMap {}

impl From<ErrorMap> for Error {
    fn from(map: ErrorMap) -> Self {
        Error::Api(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_map_renders_every_key() {
        let map: ErrorMap =
            serde_json::from_value(json!({"detail": "invalid symbol", "code": 42})).unwrap();
        let rendered = map.to_string();
        assert!(rendered.contains("detail"));
        assert!(rendered.contains("invalid symbol"));
        assert!(rendered.contains("code"));
        assert!(rendered.contains("42"));
        assert!(rendered.starts_with("Error returned from API:"));
    }

    #[test]
    fn error_map_handles_nested_values() {
        let map: ErrorMap =
            serde_json::from_value(json!({"fields": {"symbol": ["required"]}})).unwrap();
        let rendered = map.to_string();
        assert!(rendered.contains("fields"));
        assert!(rendered.contains("symbol"));
    }

    #[test]
    fn error_map_rejects_non_objects() {
        assert!(serde_json::from_str::<ErrorMap>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<ErrorMap>("not json").is_err());
    }

    #[test]
    fn bad_response_preserves_status_and_body() {
        let err = Error::BadResponse {
            status: "500 Internal Server Error".to_string(),
            body: "not json".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("not json"));
    }

    #[test]
    fn api_errors_accessor() {
        let map: ErrorMap = serde_json::from_value(json!({"detail": "nope"})).unwrap();
        let err = Error::from(map);
        assert!(err.api_errors().is_some());
        assert!(Error::Config("bad".into()).api_errors().is_none());
    }
}
