//! HTTP client core: construction, request options, and dispatch.
//!
//! [`RobinhoodClient`] is the entry point. It owns the transport
//! (`reqwest::Client`), the authenticated [`Session`](crate::auth::Session),
//! and the primary account cached at bootstrap. Endpoint services hang off it
//! as method calls.
//!
//! # Example
//!
//! ```no_run
//! use robinhood_rs::auth::OAuthTokenSource;
//! use robinhood_rs::RobinhoodClient;
//!
//! # async fn example() -> robinhood_rs::Result<()> {
//! let client = RobinhoodClient::dial(OAuthTokenSource::new("user", "pass")).await?;
//! let quote = client.quotes().get("SPY").await?;
//! println!("SPY last: {}", quote.last_trade_price);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod request;

pub use config::ClientConfig;
pub use http::RobinhoodClient;
pub use request::{apply_request_options, RequestOption};
pub(crate) use http::ClientInner;
