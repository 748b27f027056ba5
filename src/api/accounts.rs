//! Accounts service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::endpoints;
use crate::models::{Account, Paginated};
use crate::Result;

/// Service for account operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: robinhood_rs::RobinhoodClient) -> robinhood_rs::Result<()> {
/// let accounts = client.accounts().list().await?;
/// for account in accounts {
///     println!("{}: buying power {}", account.account_number, account.buying_power);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all accounts for the authenticated user.
    pub async fn list(&self) -> Result<Vec<Account>> {
        let page: Paginated<Account> = self
            .inner
            .get(&self.inner.endpoint(endpoints::ACCOUNTS), &[])
            .await?;
        Ok(page.results)
    }

    /// Get one account by account number.
    pub async fn get(&self, account_number: &str) -> Result<Account> {
        let url = format!(
            "{}{}/",
            self.inner.endpoint(endpoints::ACCOUNTS),
            account_number
        );
        self.inner.get(&url, &[]).await
    }
}
