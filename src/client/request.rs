//! Composable request options.
//!
//! A [`RequestOption`] is a pure, potentially-failing mutator over a built
//! request: it adjusts query parameters, headers, or other request metadata
//! and carries no networking logic. Endpoint methods supply their own default
//! option set and let callers append more, which avoids one bespoke method
//! per parameter combination.
//!
//! Composition is an ordered sequence applied left to right. The first
//! failing option aborts the sequence and its error is surfaced; options
//! after it are never applied.

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Request;

use crate::{Error, Result};

/// A composable mutator applied to a request before it is sent.
pub struct RequestOption {
    apply: Box<dyn Fn(&mut Request) -> Result<()> + Send + Sync>,
}

impl RequestOption {
    /// Create an option from an arbitrary mutator function.
    pub fn new(f: impl Fn(&mut Request) -> Result<()> + Send + Sync + 'static) -> Self {
        Self { apply: Box::new(f) }
    }

    /// Set a query parameter.
    ///
    /// Duplicate keys resolve last-write-wins: any existing pairs with the
    /// same key are removed before the new pair is appended, so the encoded
    /// query is deterministic regardless of how defaults and caller options
    /// collide.
    pub fn query(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        Self::new(move |req| {
            let url = req.url_mut();
            let kept: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| k.as_ref() != key.as_str())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (k, v) in &kept {
                pairs.append_pair(k, v);
            }
            pairs.append_pair(&key, &value);
            Ok(())
        })
    }

    /// Set a header. Fails if the name or value is not a valid header.
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        Self::new(move |req| {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidInput(format!("invalid header name {name:?}: {e}")))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|e| Error::InvalidInput(format!("invalid value for header {name}: {e}")))?;
            req.headers_mut().insert(header_name, header_value);
            Ok(())
        })
    }

    /// Apply this option to a request.
    pub fn apply(&self, req: &mut Request) -> Result<()> {
        (self.apply)(req)
    }
}

impl std::fmt::Debug for RequestOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestOption").finish_non_exhaustive()
    }
}

/// Apply options in order, stopping at the first failure.
pub fn apply_request_options(req: &mut Request, options: &[RequestOption]) -> Result<()> {
    for option in options {
        option.apply(req)?;
    }
    Ok(())
}
