//! Fundamentals service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestOption};
use crate::endpoints;
use crate::models::{Fundamental, Paginated};
use crate::Result;

/// Service for instrument fundamentals.
pub struct FundamentalsService {
    inner: Arc<ClientInner>,
}

impl FundamentalsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get fundamentals for one symbol.
    pub async fn get(&self, symbol: &str) -> Result<Fundamental> {
        let url = format!("{}{}/", self.inner.endpoint(endpoints::FUNDAMENTALS), symbol);
        self.inner.get(&url, &[]).await
    }

    /// Get fundamentals for several symbols in one request.
    pub async fn get_many(&self, symbols: &[&str]) -> Result<Vec<Fundamental>> {
        let options = [RequestOption::query("symbols", symbols.join(","))];
        let page: Paginated<Fundamental> = self
            .inner
            .get(&self.inner.endpoint(endpoints::FUNDAMENTALS), &options)
            .await?;
        Ok(page.results)
    }
}
