//! Historical market data service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestOption};
use crate::endpoints;
use crate::models::Historical;
use crate::Result;

/// Default candle interval.
pub const DEFAULT_INTERVAL: &str = "5minute";
/// Default time span.
pub const DEFAULT_SPAN: &str = "day";
/// Default bounds.
pub const DEFAULT_BOUNDS: &str = "trading";

/// The default query options for the historicals endpoint:
/// `interval=5minute`, `span=day`, `bounds=trading`.
pub fn default_historical_options() -> Vec<RequestOption> {
    vec![
        RequestOption::query("interval", DEFAULT_INTERVAL),
        RequestOption::query("span", DEFAULT_SPAN),
        RequestOption::query("bounds", DEFAULT_BOUNDS),
    ]
}

/// Service for historical candle data.
///
/// # Example
///
/// ```no_run
/// use robinhood_rs::RequestOption;
///
/// # async fn example(client: robinhood_rs::RobinhoodClient) -> robinhood_rs::Result<()> {
/// let instrument = client.instruments().for_symbol("OKTA").await?;
///
/// // Defaults: interval=5minute, span=day, bounds=trading.
/// let candles = client.historicals().get(&instrument.id).await?;
///
/// // Caller options override defaults per key.
/// let weekly = client
///     .historicals()
///     .get_with_options(&instrument.id, vec![RequestOption::query("span", "week")])
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct HistoricalsService {
    inner: Arc<ClientInner>,
}

impl HistoricalsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get historical candles for an instrument using the default options.
    pub async fn get(&self, instrument_id: &str) -> Result<Historical> {
        self.get_with_options(instrument_id, Vec::new()).await
    }

    /// Get historical candles with caller options appended after the
    /// defaults. Duplicate query keys resolve last-write-wins, so a caller
    /// option replaces the default for the same key.
    pub async fn get_with_options(
        &self,
        instrument_id: &str,
        options: Vec<RequestOption>,
    ) -> Result<Historical> {
        let mut composed = default_historical_options();
        composed.extend(options);
        let url = format!(
            "{}{}/",
            self.inner.endpoint(endpoints::HISTORICALS),
            instrument_id
        );
        self.inner.get(&url, &composed).await
    }
}
