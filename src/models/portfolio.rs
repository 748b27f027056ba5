//! Portfolio and position records.

use serde::{Deserialize, Serialize};

use super::Meta;

/// The aggregate value of one account's holdings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Canonical URL of this portfolio.
    #[serde(default)]
    pub url: String,
    /// URL of the owning account.
    #[serde(default)]
    pub account: String,
    /// Total account equity.
    #[serde(default)]
    pub equity: String,
    /// Equity during extended hours, if available.
    #[serde(default)]
    pub extended_hours_equity: Option<String>,
    /// Market value of all positions.
    #[serde(default)]
    pub market_value: String,
    /// Market value during extended hours, if available.
    #[serde(default)]
    pub extended_hours_market_value: Option<String>,
    /// Equity at the previous close.
    #[serde(default)]
    pub equity_previous_close: String,
    /// Equity at the last core (regular-hours) session.
    #[serde(default)]
    pub last_core_equity: String,
    /// Margin excess over requirements.
    #[serde(default)]
    pub excess_margin: String,
    /// Withdrawable amount.
    #[serde(default)]
    pub withdrawable_amount: String,
}

/// One account's holding in one instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Shared resource metadata.
    #[serde(flatten)]
    pub meta: Meta,
    /// URL of the owning account.
    #[serde(default)]
    pub account: String,
    /// URL of the held instrument.
    #[serde(default)]
    pub instrument: String,
    /// Number of shares held.
    #[serde(default)]
    pub quantity: String,
    /// Average acquisition price per share.
    #[serde(default)]
    pub average_buy_price: String,
    /// Shares reserved for open buy orders.
    #[serde(default)]
    pub shares_held_for_buys: String,
    /// Shares reserved for open sell orders.
    #[serde(default)]
    pub shares_held_for_sells: String,
    /// Quantity available during intraday trading.
    #[serde(default)]
    pub intraday_quantity: String,
    /// Average buy price for intraday positions.
    #[serde(default)]
    pub intraday_average_buy_price: String,
}
