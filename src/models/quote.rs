//! Snapshot quote and fundamentals records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A snapshot quote for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Current ask price.
    #[serde(default)]
    pub ask_price: String,
    /// Shares offered at the ask.
    #[serde(default)]
    pub ask_size: u64,
    /// Current bid price.
    #[serde(default)]
    pub bid_price: String,
    /// Shares wanted at the bid.
    #[serde(default)]
    pub bid_size: u64,
    /// Price of the most recent trade.
    #[serde(default)]
    pub last_trade_price: String,
    /// Price of the most recent extended-hours trade, if any.
    #[serde(default)]
    pub last_extended_hours_trade_price: Option<String>,
    /// Previous session's closing price.
    #[serde(default)]
    pub previous_close: String,
    /// Previous close adjusted for corporate actions.
    #[serde(default)]
    pub adjusted_previous_close: String,
    /// Date of the previous close.
    #[serde(default)]
    pub previous_close_date: String,
    /// Whether trading is currently halted.
    #[serde(default)]
    pub trading_halted: bool,
    /// Source of the last trade, e.g. `consolidated`.
    #[serde(default)]
    pub last_trade_price_source: String,
    /// When the quote was generated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// URL of the quoted instrument.
    #[serde(default)]
    pub instrument: String,
}

/// Fundamental data for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamental {
    /// Session opening price.
    #[serde(default)]
    pub open: String,
    /// Session high.
    #[serde(default)]
    pub high: String,
    /// Session low.
    #[serde(default)]
    pub low: String,
    /// Session volume.
    #[serde(default)]
    pub volume: String,
    /// Average daily volume.
    #[serde(default)]
    pub average_volume: String,
    /// 52-week high.
    #[serde(default)]
    pub high_52_weeks: String,
    /// 52-week low.
    #[serde(default)]
    pub low_52_weeks: String,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: String,
    /// Dividend yield, if any.
    #[serde(default)]
    pub dividend_yield: Option<String>,
    /// Price/earnings ratio, if any.
    #[serde(default)]
    pub pe_ratio: Option<String>,
    /// Issuer description.
    #[serde(default)]
    pub description: String,
    /// URL of the described instrument.
    #[serde(default)]
    pub instrument: String,
}
