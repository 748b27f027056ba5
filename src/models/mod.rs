//! Data models for the Robinhood API.
//!
//! Pure data shapes decoded from server responses. Models are organized by
//! domain:
//!
//! - [`meta`] - The shared `Meta` shape embedded in most records
//! - [`account`] - Trading accounts
//! - [`instrument`] - Instrument metadata
//! - [`quote`] - Snapshot quotes and fundamentals
//! - [`portfolio`] - Portfolios and positions
//! - [`watchlist`] - User watchlists
//! - [`order`] - Order records
//! - [`historical`] - Historical candle data
//!
//! All records are read-only from the client's perspective: they are decoded
//! from responses and never constructed client-side. Unknown fields are
//! ignored; monetary amounts arrive as decimal strings and are kept as-is.

pub mod account;
pub mod historical;
pub mod instrument;
pub mod meta;
pub mod order;
pub mod portfolio;
pub mod quote;
pub mod watchlist;

pub use account::Account;
pub use historical::{Candle, Historical};
pub use instrument::Instrument;
pub use meta::Meta;
pub use order::OrderOutput;
pub use portfolio::{Portfolio, Position};
pub use quote::{Fundamental, Quote};
pub use watchlist::Watchlist;

use serde::Deserialize;

/// A page of results from a listing endpoint.
///
/// Robinhood list endpoints wrap their items in a `results` array with
/// `next`/`previous` cursor URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    /// The records in this page.
    pub results: Vec<T>,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
}
