//! Account service for account details and cash movements.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::query::timestamp;
use crate::client::{ClientInner, PaginatedStream, Request};
use crate::models::{Account, BankStatement, BankStatementType, Document, NewWithdrawal, Sorting, Withdrawal};
use crate::Result;

/// Service for account-related operations.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: lemon_markets_rs::LemonClient) -> lemon_markets_rs::Result<()> {
/// let account = client.account().get().await?;
/// println!("Balance: {:?}", account.balance);
///
/// let mut withdrawals = client.account().withdrawals();
/// while let Some(withdrawal) = withdrawals.next().await {
///     println!("{:?}", withdrawal?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing bank statements.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BankStatementsQuery {
    /// Filter by booking type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub statement_type: Option<BankStatementType>,
    /// Bookings on or after this time
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize")]
    pub from: Option<DateTime<Utc>>,
    /// Bookings before this time
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize")]
    pub to: Option<DateTime<Utc>>,
    /// Result ordering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Sorting>,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get details for the account the API key belongs to.
    pub async fn get(&self) -> Result<Account> {
        self.inner
            .fetch(&self.inner.trading, Request::get("account"))
            .await
    }

    /// Stream past and pending withdrawals.
    pub fn withdrawals(&self) -> PaginatedStream<Withdrawal> {
        self.inner
            .stream(&self.inner.trading, Ok(Request::get("account/withdrawals")))
    }

    /// Request a withdrawal to the reference account.
    ///
    /// The server acknowledges with an empty payload.
    pub async fn create_withdrawal(&self, withdrawal: &NewWithdrawal) -> Result<()> {
        let request = Request::post("account/withdrawals").with_body(withdrawal)?;
        self.inner.execute(&self.inner.trading, request).await
    }

    /// Stream bookings on the cash account.
    pub fn bank_statements(&self, query: Option<BankStatementsQuery>) -> PaginatedStream<BankStatement> {
        let request = Request::get("account/bankstatements").with_filter(query.as_ref());
        self.inner.stream(&self.inner.trading, request)
    }

    /// Stream account documents.
    pub fn documents(&self) -> PaginatedStream<Document> {
        self.inner
            .stream(&self.inner.trading, Ok(Request::get("account/documents")))
    }
}
