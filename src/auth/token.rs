//! Bearer tokens and the token source boundary.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{endpoints, Error, Result};

/// OAuth client ID used by the official web frontend.
pub const DEFAULT_CLIENT_ID: &str = "c82SH0WZOsabOXGP2sxqcj34FxkvfnWRZBKlBjFS";

/// A bearer credential for API requests.
///
/// The access token is held as a [`SecretString`] and never appears in
/// `Debug` output.
#[derive(Clone)]
pub struct Token {
    access_token: SecretString,
    expires_at: Option<DateTime<Utc>>,
}

impl Token {
    /// Create a token with no known expiry. It is treated as always valid.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            expires_at: None,
        }
    }

    /// Create a token that expires at the given time.
    pub fn expiring(access_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            expires_at: Some(expires_at),
        }
    }

    /// When the token expires, if known.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the token expires within the given buffer from now.
    /// Tokens without a known expiry never report as expiring.
    pub fn expires_within(&self, buffer: Duration) -> bool {
        match self.expires_at {
            Some(at) => Utc::now() + buffer >= at,
            None => false,
        }
    }

    pub(crate) fn secret(&self) -> &SecretString {
        &self.access_token
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// An external collaborator that can produce a valid bearer token on demand.
///
/// The client trusts the source completely: whatever token it returns is
/// attached to outgoing requests. Implement this for custom credential
/// storage or refresh strategies.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Produce a currently valid token.
    async fn token(&self) -> Result<Token>;
}

/// The standard password-grant token exchange against the login endpoint.
///
/// Each [`token`](TokenSource::token) call performs one exchange; caching and
/// refresh scheduling live in [`Session`](crate::auth::Session), not here.
pub struct OAuthTokenSource {
    username: String,
    password: SecretString,
    mfa_code: Option<String>,
    client_id: String,
    endpoint: String,
}

impl OAuthTokenSource {
    /// Create a source for the given credentials using the default client ID.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            mfa_code: None,
            client_id: DEFAULT_CLIENT_ID.to_string(),
            endpoint: endpoints::LOGIN.to_string(),
        }
    }

    /// Supply a multi-factor authentication code.
    pub fn with_mfa_code(mut self, code: impl Into<String>) -> Self {
        self.mfa_code = Some(code.into());
        self
    }

    /// Override the OAuth client ID.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Override the token exchange endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl TokenSource for OAuthTokenSource {
    async fn token(&self) -> Result<Token> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            expires_in: i64,
        }

        let mut form = vec![
            ("grant_type", "password"),
            ("scope", "internal"),
            ("client_id", self.client_id.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.expose_secret()),
        ];
        if let Some(code) = &self.mfa_code {
            form.push(("mfa_code", code.as_str()));
        }

        let client = reqwest::Client::new();
        let response = client.post(&self.endpoint).form(&form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "token exchange failed ({status}): {body}"
            )));
        }

        let token_response: TokenResponse = response.json().await?;
        Ok(Token::expiring(
            token_response.access_token,
            Utc::now() + Duration::seconds(token_response.expires_in),
        ))
    }
}

impl std::fmt::Debug for OAuthTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthTokenSource")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
