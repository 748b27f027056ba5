//! Endpoint constants for the Robinhood API.
//!
//! The base URL plus the path suffix for every endpoint the client talks to.
//! Paths are joined onto the configured base URL at request time, so tests
//! and alternative deployments can point the client elsewhere via
//! [`ClientConfig::with_base_url`](crate::ClientConfig::with_base_url).

/// Production API base URL.
pub const BASE: &str = "https://api.robinhood.com/";

/// OAuth2 token exchange endpoint (absolute; used by the login collaborator).
pub const LOGIN: &str = "https://api.robinhood.com/oauth2/token/";

/// Accounts listing.
pub const ACCOUNTS: &str = "accounts/";

/// Snapshot quotes.
pub const QUOTES: &str = "quotes/";

/// Account portfolios.
pub const PORTFOLIOS: &str = "portfolios/";

/// User watchlists.
pub const WATCHLISTS: &str = "watchlists/";

/// Instrument metadata.
pub const INSTRUMENTS: &str = "instruments/";

/// Instrument fundamentals.
pub const FUNDAMENTALS: &str = "fundamentals/";

/// Order management.
pub const ORDERS: &str = "orders/";

/// Options positions and chains.
pub const OPTIONS: &str = "options/";

/// Positions held by an account.
pub const POSITIONS: &str = "positions/";

/// Market data root.
pub const MARKET: &str = "marketdata/";

/// Option quotes under market data.
pub const OPTION_QUOTE: &str = "marketdata/options/";

/// Historical candles under market data.
pub const HISTORICALS: &str = "marketdata/historicals/";
