//! Instruments service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestOption};
use crate::endpoints;
use crate::models::{Instrument, Paginated};
use crate::{Error, Result};

/// Service for instrument lookups.
pub struct InstrumentsService {
    inner: Arc<ClientInner>,
}

impl InstrumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get an instrument by ID.
    pub async fn get(&self, id: &str) -> Result<Instrument> {
        let url = format!("{}{}/", self.inner.endpoint(endpoints::INSTRUMENTS), id);
        self.inner.get(&url, &[]).await
    }

    /// Get an instrument by its canonical URL.
    ///
    /// Many records reference instruments by URL; this fetches one directly.
    pub async fn get_by_url(&self, url: &str) -> Result<Instrument> {
        self.inner.get(url, &[]).await
    }

    /// Look up the instrument for a ticker symbol.
    pub async fn for_symbol(&self, symbol: &str) -> Result<Instrument> {
        let options = [RequestOption::query("symbol", symbol)];
        let page: Paginated<Instrument> = self
            .inner
            .get(&self.inner.endpoint(endpoints::INSTRUMENTS), &options)
            .await?;
        page.results
            .into_iter()
            .next()
            .ok_or_else(|| Error::InvalidSymbol(symbol.to_string()))
    }
}
