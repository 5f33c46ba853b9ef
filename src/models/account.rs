//! Account, withdrawal, bank statement and document models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::enums::BankStatementType;

/// Details of the account the API key belongs to.
///
/// Cash amounts are integers in hundredths of a cent (`10000` = 1 EUR).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Account {
    /// Account creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Account ID
    pub account_id: String,
    /// First name
    #[serde(default)]
    pub firstname: Option<String>,
    /// Last name
    #[serde(default, alias = "Lastname")]
    pub lastname: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Billing address
    #[serde(default)]
    pub billing_address: Option<String>,
    /// Billing email
    #[serde(default)]
    pub billing_email: Option<String>,
    /// Billing name
    #[serde(default)]
    pub billing_name: Option<String>,
    /// Billing VAT number
    #[serde(default)]
    pub billing_vat: Option<String>,
    /// Trading mode (`paper` or `money`)
    #[serde(default)]
    pub mode: Option<String>,
    /// Deposit ID
    #[serde(default)]
    pub deposit_id: Option<String>,
    /// Client ID
    #[serde(default)]
    pub client_id: Option<String>,
    /// Account number
    #[serde(default)]
    pub account_number: Option<String>,
    /// IBAN of the brokerage account
    #[serde(default)]
    pub iban_brokerage: Option<String>,
    /// IBAN of the reference account
    #[serde(default)]
    pub iban_origin: Option<String>,
    /// Bank name of the reference account
    #[serde(default)]
    pub bank_name_origin: Option<String>,
    /// Current balance
    #[serde(default)]
    pub balance: Option<i64>,
    /// Cash available for buying
    #[serde(default)]
    pub cash_to_invest: Option<i64>,
    /// Cash available for withdrawal
    #[serde(default)]
    pub cash_to_withdraw: Option<i64>,
    /// Subscribed trading plan
    #[serde(default)]
    pub trading_plan: Option<String>,
    /// Subscribed data plan
    #[serde(default)]
    pub data_plan: Option<String>,
    /// Remaining tax allowance
    #[serde(default)]
    pub tax_allowance: Option<i64>,
    /// Start of the tax allowance period
    #[serde(default)]
    pub tax_allowance_start: Option<NaiveDate>,
    /// End of the tax allowance period
    #[serde(default)]
    pub tax_allowance_end: Option<NaiveDate>,
}

/// A past or pending withdrawal.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Withdrawal {
    /// Withdrawal ID
    pub id: String,
    /// Amount in hundredths of a cent
    pub amount: i64,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Booking date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Idempotency key supplied on creation
    #[serde(default)]
    pub idempotency: Option<String>,
}

/// Request body for creating a withdrawal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWithdrawal {
    /// Amount in hundredths of a cent
    pub amount: i64,
    /// Personal verification PIN
    pub pin: String,
    /// Optional idempotency key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency: Option<String>,
}

impl NewWithdrawal {
    /// Create a withdrawal request.
    pub fn new(amount: i64, pin: impl Into<String>) -> Self {
        Self {
            amount,
            pin: pin.into(),
            idempotency: None,
        }
    }

    /// Set an idempotency key.
    pub fn with_idempotency(mut self, key: impl Into<String>) -> Self {
        self.idempotency = Some(key.into());
        self
    }
}

/// A booking on the brokerage cash account.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BankStatement {
    /// Statement ID
    pub id: String,
    /// Account ID
    #[serde(default)]
    pub account_id: Option<String>,
    /// Kind of booking
    #[serde(rename = "type")]
    pub statement_type: BankStatementType,
    /// Booking date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Amount in hundredths of a cent
    pub amount: i64,
    /// ISIN for order-related bookings
    #[serde(default)]
    pub isin: Option<String>,
    /// Instrument title for order-related bookings
    #[serde(default)]
    pub isin_title: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An account document such as a tax report or contract note.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    /// Document ID
    pub id: String,
    /// File name
    pub name: String,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Document category
    #[serde(default)]
    pub category: Option<String>,
    /// Download link
    #[serde(default)]
    pub link: Option<String>,
    /// First time the document was opened
    #[serde(default)]
    pub viewed_first_at: Option<DateTime<Utc>>,
    /// Last time the document was opened
    #[serde(default)]
    pub viewed_last_at: Option<DateTime<Utc>>,
}
