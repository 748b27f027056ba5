//! The client type and the dispatch pipeline.

use std::sync::{Arc, OnceLock};

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, Request};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::api::{
    AccountsService, FundamentalsService, HistoricalsService, InstrumentsService,
    OrdersService, PortfoliosService, PositionsService, QuotesService, WatchlistsService,
};
use crate::auth::{Session, TokenSource};
use crate::error::ErrorMap;
use crate::models::Account;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::request::{apply_request_options, RequestOption};

/// The main client for the Robinhood API.
///
/// Holds the transport, the authenticated session, and the primary account
/// cached at bootstrap. Cloning is cheap; clones share all state. The client
/// keeps no per-call mutable state, so one instance can serve many concurrent
/// tasks.
///
/// # Example
///
/// ```no_run
/// use robinhood_rs::auth::OAuthTokenSource;
/// use robinhood_rs::RobinhoodClient;
///
/// # async fn example() -> robinhood_rs::Result<()> {
/// let client = RobinhoodClient::dial(OAuthTokenSource::new("user", "pass")).await?;
///
/// if let Some(account) = client.primary_account() {
///     println!("primary account: {}", account.account_number);
/// }
///
/// let quotes = client.quotes().get_many(&["AAPL", "SPY"]).await?;
/// # Ok(())
/// # }
/// ```
pub struct RobinhoodClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
    // Written at most once during dial bootstrap, read-only afterward.
    pub(crate) primary_account: OnceLock<Account>,
}

impl RobinhoodClient {
    /// Create a client from a token source, using default configuration.
    ///
    /// On success the client eagerly lists accounts and caches the first one
    /// as the primary account (an empty listing is not an error; the cache
    /// just stays unset). If the listing itself fails the constructed client
    /// is still usable and is recoverable from the returned
    /// [`Error::Bootstrap`].
    pub async fn dial(source: impl TokenSource + 'static) -> Result<Self> {
        Self::dial_with_config(source, ClientConfig::default()).await
    }

    /// Create a client from a token source with custom configuration.
    ///
    /// See [`dial`](Self::dial) for bootstrap semantics.
    pub async fn dial_with_config(
        source: impl TokenSource + 'static,
        config: ClientConfig,
    ) -> Result<Self> {
        let session = Session::from_source(source).await?;
        let client = Self::with_session(session, config)?;

        match client.accounts().list().await {
            Ok(accounts) => {
                if let Some(first) = accounts.into_iter().next() {
                    let _ = client.inner.primary_account.set(first);
                }
                Ok(client)
            }
            Err(err) => Err(Error::Bootstrap {
                client: Box::new(client),
                source: Box::new(err),
            }),
        }
    }

    /// Create a client from an existing session, building the transport from
    /// the configuration. No bootstrap listing is performed.
    ///
    /// Fails if the configuration produces an unusable transport (bad
    /// user agent, TLS setup failure); no partial client is returned.
    pub fn with_session(session: Session, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP transport: {e}")))?;
        Ok(Self::assemble(http, session, config))
    }

    /// Create a client around a caller-supplied transport.
    ///
    /// The supplied `reqwest::Client` is the sole place where TLS, proxying,
    /// timeouts, and connection pooling are decided; the core adds nothing on
    /// top. The configured timeout is ignored in favor of the transport's
    /// own settings.
    pub fn with_http_client(
        http: reqwest::Client,
        session: Session,
        config: ClientConfig,
    ) -> Self {
        Self::assemble(http, session, config)
    }

    fn assemble(http: reqwest::Client, session: Session, config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
                primary_account: OnceLock::new(),
            }),
        }
    }

    /// The primary account cached during [`dial`](Self::dial) bootstrap.
    ///
    /// This is a snapshot from construction time, not kept in sync with the
    /// server. Absent when the client was not dialed or the listing came back
    /// empty.
    pub fn primary_account(&self) -> Option<&Account> {
        self.inner.primary_account.get()
    }

    /// The session backing this client.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// The accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// The quotes service.
    pub fn quotes(&self) -> QuotesService {
        QuotesService::new(self.inner.clone())
    }

    /// The instruments service.
    pub fn instruments(&self) -> InstrumentsService {
        InstrumentsService::new(self.inner.clone())
    }

    /// The fundamentals service.
    pub fn fundamentals(&self) -> FundamentalsService {
        FundamentalsService::new(self.inner.clone())
    }

    /// The portfolios service.
    pub fn portfolios(&self) -> PortfoliosService {
        PortfoliosService::new(self.inner.clone())
    }

    /// The positions service.
    pub fn positions(&self) -> PositionsService {
        PositionsService::new(self.inner.clone())
    }

    /// The watchlists service.
    pub fn watchlists(&self) -> WatchlistsService {
        WatchlistsService::new(self.inner.clone())
    }

    /// The orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// The historical market data service.
    pub fn historicals(&self) -> HistoricalsService {
        HistoricalsService::new(self.inner.clone())
    }
}

impl Clone for RobinhoodClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for RobinhoodClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobinhoodClient")
            .field("config", &self.inner.config)
            .field(
                "primary_account",
                &self.inner.primary_account.get().map(|a| &a.account_number),
            )
            .finish()
    }
}

impl ClientInner {
    /// Join an endpoint suffix onto the configured base URL.
    pub(crate) fn endpoint(&self, suffix: &str) -> String {
        format!("{}{}", self.config.base_url, suffix)
    }

    /// Build a request for the given method and URL, attach the bearer
    /// credential, and run the option composer over it.
    pub(crate) async fn new_request(
        &self,
        method: Method,
        url: &str,
        options: &[RequestOption],
    ) -> Result<Request> {
        let mut req = Request::new(method, Url::parse(url)?);

        let bearer = self.session.bearer().await?;
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", bearer.expose_secret()))
                .map_err(|_| Error::InvalidInput("invalid token format".to_string()))?;
        value.set_sensitive(true);
        req.headers_mut().insert(AUTHORIZATION, value);

        apply_request_options(&mut req, options)?;
        Ok(req)
    }

    /// One full dispatch: send, classify by status class, decode.
    ///
    /// 2xx decodes the body into `T`; a mismatch there surfaces as
    /// [`Error::Json`], the caller's contract problem. Anything else tries to
    /// decode the body as an [`ErrorMap`], falling back to
    /// [`Error::BadResponse`] with the raw status line and body text so
    /// nothing is ever swallowed. One request, one outcome; no retries.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, req: Request) -> Result<T> {
        debug!(method = %req.method(), url = %req.url(), "dispatching request");

        let response = self.http.execute(req).await?;
        let status = response.status();

        if !status.is_success() {
            // Reading the full text keeps the body available for the
            // fallback diagnostic after a failed ErrorMap decode.
            let body = response.text().await?;
            return match serde_json::from_str::<ErrorMap>(&body) {
                Ok(map) => Err(Error::Api(map)),
                Err(_) => Err(Error::BadResponse {
                    status: status.to_string(),
                    body,
                }),
            };
        }

        debug!(status = status.as_u16(), "response received");
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Error::Json)
    }

    /// GET the URL with the given options and decode the response into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &[RequestOption],
    ) -> Result<T> {
        let req = self.new_request(Method::GET, url, options).await?;
        self.execute(req).await
    }
}
