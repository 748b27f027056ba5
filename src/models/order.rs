//! Order records returned by the orders endpoint.

use serde::{Deserialize, Serialize};

use super::Meta;

/// A previously placed order as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderOutput {
    /// Shared resource metadata.
    #[serde(flatten)]
    pub meta: Meta,
    /// Server-assigned order ID.
    #[serde(default)]
    pub id: String,
    /// URL of the owning account.
    #[serde(default)]
    pub account: String,
    /// URL of the ordered instrument.
    #[serde(default)]
    pub instrument: String,
    /// URL to cancel this order, if it is still cancelable.
    #[serde(default)]
    pub cancel: Option<String>,
    /// Order state, e.g. `queued`, `filled`, `cancelled`.
    #[serde(default)]
    pub state: String,
    /// Order side, `buy` or `sell`.
    #[serde(default)]
    pub side: String,
    /// Order type, e.g. `market` or `limit`.
    #[serde(default, rename = "type")]
    pub order_type: String,
    /// Time in force, e.g. `gfd` or `gtc`.
    #[serde(default)]
    pub time_in_force: String,
    /// Trigger, e.g. `immediate` or `stop`.
    #[serde(default)]
    pub trigger: String,
    /// Limit price, if any.
    #[serde(default)]
    pub price: Option<String>,
    /// Stop price, if any.
    #[serde(default)]
    pub stop_price: Option<String>,
    /// Ordered quantity.
    #[serde(default)]
    pub quantity: String,
    /// Quantity filled so far.
    #[serde(default)]
    pub cumulative_quantity: String,
    /// Average fill price, if any fills occurred.
    #[serde(default)]
    pub average_price: Option<String>,
    /// Fees charged.
    #[serde(default)]
    pub fees: String,
    /// Reason for rejection, if the order was rejected.
    #[serde(default)]
    pub reject_reason: Option<String>,
}
