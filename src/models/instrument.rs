//! Instrument metadata records.

use serde::{Deserialize, Serialize};

/// A tradeable instrument.
///
/// Instruments are referenced by URL throughout the API; most other records
/// carry an `instrument` URL rather than an embedded copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Server-assigned instrument ID (UUID).
    #[serde(default)]
    pub id: String,
    /// Canonical URL of this instrument.
    #[serde(default)]
    pub url: String,
    /// Ticker symbol, e.g. `AAPL`.
    #[serde(default)]
    pub symbol: String,
    /// Full instrument name.
    #[serde(default)]
    pub name: String,
    /// Short display name, if any.
    #[serde(default)]
    pub simple_name: Option<String>,
    /// Listing state, e.g. `active`.
    #[serde(default)]
    pub state: String,
    /// Tradability, e.g. `tradable` or `untradable`.
    #[serde(default)]
    pub tradability: String,
    /// Whether the instrument is currently tradeable.
    #[serde(default)]
    pub tradeable: bool,
    /// Country code of the listing.
    #[serde(default)]
    pub country: String,
    /// URL of the instrument's quote.
    #[serde(default)]
    pub quote: String,
    /// URL of the instrument's fundamentals.
    #[serde(default)]
    pub fundamentals: String,
    /// URL of the market the instrument trades on.
    #[serde(default)]
    pub market: String,
    /// URL of the instrument's split history.
    #[serde(default)]
    pub splits: String,
    /// Listing date (`YYYY-MM-DD`), if known.
    #[serde(default)]
    pub list_date: Option<String>,
}
