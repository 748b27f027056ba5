//! Portfolios service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::endpoints;
use crate::models::{Paginated, Portfolio};
use crate::Result;

/// Service for portfolio values.
pub struct PortfoliosService {
    inner: Arc<ClientInner>,
}

impl PortfoliosService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List portfolios for all of the user's accounts.
    pub async fn list(&self) -> Result<Vec<Portfolio>> {
        let page: Paginated<Portfolio> = self
            .inner
            .get(&self.inner.endpoint(endpoints::PORTFOLIOS), &[])
            .await?;
        Ok(page.results)
    }

    /// Get the portfolio for one account.
    pub async fn get(&self, account_number: &str) -> Result<Portfolio> {
        let url = format!(
            "{}{}/",
            self.inner.endpoint(endpoints::PORTFOLIOS),
            account_number
        );
        self.inner.get(&url, &[]).await
    }
}
