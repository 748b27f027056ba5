//! Session management over a token source.

use std::sync::Arc;

use chrono::Duration;
use secrecy::SecretString;
use tokio::sync::RwLock;

use super::{Token, TokenSource};
use crate::{Error, Result};

/// Buffer before expiry at which the session refreshes proactively.
const REFRESH_BUFFER_SECS: i64 = 60;

/// An authenticated session for the Robinhood API.
///
/// Caches the current bearer token and refreshes it from the attached
/// [`TokenSource`] when it is about to expire. Cloning is cheap; clones share
/// the same token state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

struct SessionInner {
    token: Token,
    source: Option<Box<dyn TokenSource>>,
}

impl Session {
    /// Create a session from a pre-resolved token.
    ///
    /// The session never refreshes; suitable for short-lived programs or when
    /// token management happens entirely outside the client.
    pub fn from_token(token: Token) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                token,
                source: None,
            })),
        }
    }

    /// Create a session by fetching an initial token from the given source.
    ///
    /// The source is retained for later refreshes.
    pub async fn from_source(source: impl TokenSource + 'static) -> Result<Self> {
        let token = source.token().await?;
        Ok(Self {
            inner: Arc::new(RwLock::new(SessionInner {
                token,
                source: Some(Box::new(source)),
            })),
        })
    }

    /// Fetch a fresh token from the source, replacing the cached one.
    pub async fn refresh(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        let token = match &inner.source {
            Some(source) => source.token().await?,
            None => {
                return Err(Error::Authentication(
                    "session has no token source to refresh from".to_string(),
                ))
            }
        };
        inner.token = token;
        Ok(())
    }

    /// Refresh if the cached token is expired or about to expire.
    pub async fn ensure_valid(&self) -> Result<()> {
        let stale = {
            let inner = self.inner.read().await;
            inner.source.is_some()
                && inner
                    .token
                    .expires_within(Duration::seconds(REFRESH_BUFFER_SECS))
        };
        if stale {
            self.refresh().await?;
        }
        Ok(())
    }

    /// Whether the cached token has expired.
    pub async fn is_expired(&self) -> bool {
        self.inner
            .read()
            .await
            .token
            .expires_within(Duration::zero())
    }

    /// The current bearer credential, refreshed first if needed.
    pub(crate) async fn bearer(&self) -> Result<SecretString> {
        self.ensure_valid().await?;
        Ok(self.inner.read().await.token.secret().clone())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
