//! Watchlists service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::endpoints;
use crate::models::{Paginated, Watchlist};
use crate::Result;

/// Service for user watchlists.
pub struct WatchlistsService {
    inner: Arc<ClientInner>,
}

impl WatchlistsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the user's watchlists.
    pub async fn list(&self) -> Result<Vec<Watchlist>> {
        let page: Paginated<Watchlist> = self
            .inner
            .get(&self.inner.endpoint(endpoints::WATCHLISTS), &[])
            .await?;
        Ok(page.results)
    }
}
