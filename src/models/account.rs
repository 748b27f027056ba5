//! Trading account records.

use serde::{Deserialize, Serialize};

use super::Meta;

/// A Robinhood trading account.
///
/// Monetary amounts are decimal strings as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Shared resource metadata.
    #[serde(flatten)]
    pub meta: Meta,
    /// The account number, e.g. `5QR12345`.
    #[serde(default)]
    pub account_number: String,
    /// Buying power available for new orders.
    #[serde(default)]
    pub buying_power: String,
    /// Settled cash balance.
    #[serde(default)]
    pub cash: String,
    /// Cash available for withdrawal.
    #[serde(default)]
    pub cash_available_for_withdrawal: String,
    /// Cash held for open orders.
    #[serde(default)]
    pub cash_held_for_orders: String,
    /// Uncleared deposits.
    #[serde(default)]
    pub uncleared_deposits: String,
    /// Unsettled funds.
    #[serde(default)]
    pub unsettled_funds: String,
    /// Settled amount borrowed, for margin accounts.
    #[serde(default)]
    pub settled_amount_borrowed: String,
    /// Maximum ACH early-access amount.
    #[serde(default)]
    pub max_ach_early_access_amount: String,
    /// Account type, e.g. `cash` or `margin`.
    #[serde(default, rename = "type")]
    pub account_type: String,
    /// Whether the account is deactivated.
    #[serde(default)]
    pub deactivated: bool,
    /// Whether deposits are halted.
    #[serde(default)]
    pub deposit_halted: bool,
    /// Whether cash sweep is enabled.
    #[serde(default)]
    pub sweep_enabled: bool,
    /// Whether the account may only close existing positions.
    #[serde(default)]
    pub only_position_closing_trades: bool,
    /// URL of the account's portfolio.
    #[serde(default)]
    pub portfolio: String,
    /// URL of the account's positions listing.
    #[serde(default)]
    pub positions: String,
    /// URL of the owning user.
    #[serde(default)]
    pub user: String,
    /// SMA (special memorandum account) value, for margin accounts.
    #[serde(default)]
    pub sma: Option<String>,
}
