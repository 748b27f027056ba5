//! Watchlist records.

use serde::{Deserialize, Serialize};

/// A user-defined watchlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    /// Canonical URL of this watchlist.
    #[serde(default)]
    pub url: String,
    /// URL of the owning user.
    #[serde(default)]
    pub user: String,
    /// Watchlist name, e.g. `Default`.
    #[serde(default)]
    pub name: String,
}
