//! Quotes service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestOption};
use crate::endpoints;
use crate::models::{Paginated, Quote};
use crate::Result;

/// Service for snapshot quotes.
pub struct QuotesService {
    inner: Arc<ClientInner>,
}

impl QuotesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the quote for one symbol.
    pub async fn get(&self, symbol: &str) -> Result<Quote> {
        let url = format!("{}{}/", self.inner.endpoint(endpoints::QUOTES), symbol);
        self.inner.get(&url, &[]).await
    }

    /// Get quotes for several symbols in one request.
    pub async fn get_many(&self, symbols: &[&str]) -> Result<Vec<Quote>> {
        let options = [RequestOption::query("symbols", symbols.join(","))];
        let page: Paginated<Quote> = self
            .inner
            .get(&self.inner.endpoint(endpoints::QUOTES), &options)
            .await?;
        Ok(page.results)
    }
}
