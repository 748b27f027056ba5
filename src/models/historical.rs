//! Historical candle records from the market-data endpoint.

use serde::{Deserialize, Serialize};

/// Price metrics for one instrument over one time bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Start of the bucket (RFC 3339).
    #[serde(default)]
    pub begins_at: String,
    /// Price at bucket open.
    #[serde(default)]
    pub open_price: String,
    /// Price at bucket close.
    #[serde(default)]
    pub close_price: String,
    /// Highest price in the bucket.
    #[serde(default)]
    pub high_price: String,
    /// Lowest price in the bucket.
    #[serde(default)]
    pub low_price: String,
    /// Shares traded in the bucket.
    #[serde(default)]
    pub volume: u64,
    /// Trading session, e.g. `pre`, `reg`, `post`.
    #[serde(default)]
    pub session: String,
    /// Whether the candle was interpolated from neighboring data.
    #[serde(default)]
    pub interpolated: bool,
}

/// The historicals response for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Historical {
    /// URL of the instrument's quote.
    #[serde(default)]
    pub quote: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Candle interval the server applied, e.g. `5minute`.
    #[serde(default)]
    pub interval: String,
    /// Time span the server applied, e.g. `day`.
    #[serde(default)]
    pub span: String,
    /// Bounds the server applied, e.g. `trading`.
    #[serde(default)]
    pub bounds: String,
    /// Previous session's closing price.
    #[serde(default)]
    pub previous_close_price: String,
    /// Time of the previous close.
    #[serde(default)]
    pub previous_close_time: String,
    /// Opening price of the covered span.
    #[serde(default)]
    pub open_price: String,
    /// Opening time of the covered span.
    #[serde(default)]
    pub open_time: String,
    /// URL of the instrument.
    #[serde(default)]
    pub instrument: String,
    /// The candles themselves.
    #[serde(default)]
    pub historicals: Vec<Candle>,
}
