//! Endpoint services for the Robinhood API.
//!
//! Each service is a thin call site over the core dispatch pipeline: it
//! supplies a URL, a destination record shape, and option values, and adds no
//! mechanism of its own.

mod accounts;
mod fundamentals;
mod historicals;
mod instruments;
mod orders;
mod portfolios;
mod positions;
mod quotes;
mod watchlists;

pub use accounts::AccountsService;
pub use fundamentals::FundamentalsService;
pub use historicals::{
    default_historical_options, HistoricalsService, DEFAULT_BOUNDS, DEFAULT_INTERVAL,
    DEFAULT_SPAN,
};
pub use instruments::InstrumentsService;
pub use orders::OrdersService;
pub use portfolios::PortfoliosService;
pub use positions::PositionsService;
pub use quotes::QuotesService;
pub use watchlists::WatchlistsService;
