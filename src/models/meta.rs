//! The shared metadata shape embedded in most server records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata common to many Robinhood record types.
///
/// Embedded (flattened) into records that carry a canonical resource URL and
/// server-side timestamps. Absent fields decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// When the server created the resource.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the server last updated the resource.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Canonical URL of the resource.
    #[serde(default)]
    pub url: String,
}
