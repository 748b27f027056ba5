//! Orders service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::endpoints;
use crate::models::{OrderOutput, Paginated};
use crate::Result;

/// Service for order records.
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the user's recent orders, newest first.
    pub async fn recent(&self) -> Result<Vec<OrderOutput>> {
        let page: Paginated<OrderOutput> = self
            .inner
            .get(&self.inner.endpoint(endpoints::ORDERS), &[])
            .await?;
        Ok(page.results)
    }

    /// Get one order by ID.
    pub async fn get(&self, order_id: &str) -> Result<OrderOutput> {
        let url = format!("{}{}/", self.inner.endpoint(endpoints::ORDERS), order_id);
        self.inner.get(&url, &[]).await
    }
}
