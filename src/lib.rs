//! # robinhood-rs
//!
//! A typed async Rust client for the Robinhood brokerage HTTP/JSON API.
//!
//! The crate is built around one request/response pipeline: authenticate a
//! session, build a request through composable options, dispatch it, and
//! decode the response into a typed record or a structured error. Endpoint
//! services (accounts, quotes, instruments, fundamentals, portfolios,
//! positions, watchlists, orders, historicals) are thin call sites over that
//! pipeline.
//!
//! ## Features
//!
//! - **Pluggable authentication**: any [`auth::TokenSource`] can supply
//!   credentials; a standard OAuth password-grant source is included
//! - **Composable requests**: query parameters and headers via fail-fast
//!   [`RequestOption`] sequences instead of one method per parameter combo
//! - **Structured errors**: the server's per-field diagnostics surface as an
//!   [`ErrorMap`], and undecodable error bodies are preserved verbatim
//! - **Caller-owned transport**: supply your own `reqwest::Client` to control
//!   TLS, proxies, timeouts, and retries
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use robinhood_rs::auth::OAuthTokenSource;
//! use robinhood_rs::RobinhoodClient;
//!
//! #[tokio::main]
//! async fn main() -> robinhood_rs::Result<()> {
//!     let client = RobinhoodClient::dial(
//!         OAuthTokenSource::new("username", "password"),
//!     ).await?;
//!
//!     if let Some(account) = client.primary_account() {
//!         println!("buying power: {}", account.buying_power);
//!     }
//!
//!     let quote = client.quotes().get("SPY").await?;
//!     println!("SPY last trade: {}", quote.last_trade_price);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Historical candles
//!
//! ```rust,no_run
//! use robinhood_rs::{RequestOption, RobinhoodClient};
//!
//! # async fn example(client: RobinhoodClient) -> robinhood_rs::Result<()> {
//! let instrument = client.instruments().for_symbol("OKTA").await?;
//!
//! // interval=5minute, span=day, bounds=trading unless overridden.
//! let historical = client
//!     .historicals()
//!     .get_with_options(&instrument.id, vec![RequestOption::query("span", "week")])
//!     .await?;
//!
//! for candle in &historical.historicals {
//!     println!("{}: open {} close {}", candle.begins_at, candle.open_price, candle.close_price);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! Every failure reaches the caller as a returned error; the client never
//! logs-and-swallows. Diagnostic logging goes through [`tracing`] and is
//! purely informational — without a subscriber it is a no-op.
//!
//! ```rust,no_run
//! use robinhood_rs::Error;
//!
//! # async fn example(client: robinhood_rs::RobinhoodClient) {
//! match client.quotes().get("NOPE").await {
//!     Ok(quote) => println!("{:?}", quote),
//!     Err(Error::Api(map)) => eprintln!("API rejected the request: {map}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Session;
pub use client::{apply_request_options, ClientConfig, RequestOption, RobinhoodClient};
pub use error::{Error, ErrorMap, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use robinhood_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{OAuthTokenSource, Session, Token, TokenSource};
    pub use crate::client::{ClientConfig, RequestOption, RobinhoodClient};
    pub use crate::error::{Error, ErrorMap, Result};
    pub use crate::models::{
        Account, Candle, Fundamental, Historical, Instrument, Meta, OrderOutput, Paginated,
        Portfolio, Position, Quote, Watchlist,
    };
}
