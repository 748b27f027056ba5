//! Positions service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestOption};
use crate::endpoints;
use crate::models::{Paginated, Position};
use crate::Result;

/// Service for account positions.
pub struct PositionsService {
    inner: Arc<ClientInner>,
}

impl PositionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all positions, including ones with zero quantity.
    pub async fn list(&self) -> Result<Vec<Position>> {
        self.list_with_options(Vec::new()).await
    }

    /// List only positions with a nonzero quantity.
    pub async fn nonzero(&self) -> Result<Vec<Position>> {
        self.list_with_options(vec![RequestOption::query("nonzero", "true")])
            .await
    }

    /// List positions with caller-supplied request options.
    pub async fn list_with_options(&self, options: Vec<RequestOption>) -> Result<Vec<Position>> {
        let page: Paginated<Position> = self
            .inner
            .get(&self.inner.endpoint(endpoints::POSITIONS), &options)
            .await?;
        Ok(page.results)
    }
}
