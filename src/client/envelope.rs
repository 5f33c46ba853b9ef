//! The response envelope shared by every lemon.markets endpoint.
//!
//! Each successful response is wrapped in the same structure: status
//! metadata, pagination cursors and an untyped `results` payload. Records are
//! decoded out of the payload with [`Envelope::decode_many`] or
//! [`Envelope::decode_one`]; both are pure and can be repeated.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// Generic page-level response wrapper.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
    /// Server timestamp
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    /// `ok` or `error`
    #[serde(default)]
    pub status: String,
    /// Trading mode (`paper` or `money`)
    #[serde(default)]
    pub mode: String,
    /// Locator of the previous page, informational only
    #[serde(default, deserialize_with = "nullable_string")]
    pub previous: String,
    /// Locator of the next page; empty when this is the last page
    #[serde(default, deserialize_with = "nullable_string")]
    pub next: String,
    /// Total number of records across all pages
    #[serde(default)]
    pub total: u64,
    /// Current page number
    #[serde(default)]
    pub page: u64,
    /// Number of pages
    #[serde(default)]
    pub pages: u64,
    /// Untyped payload: an array for list endpoints, an object otherwise
    #[serde(default)]
    pub results: Value,
}

impl Envelope {
    /// Parse an envelope from a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The continuation cursor, or `None` if this is the last page.
    pub fn next_cursor(&self) -> Option<&str> {
        let next = self.next.trim();
        if next.is_empty() {
            None
        } else {
            Some(next)
        }
    }

    /// Returns `true` if the server marked the response as successful.
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }

    /// Decode the payload as a list of records.
    ///
    /// An absent or `null` payload yields no records. Anything that is not an
    /// array of `T` is a decode error and no partial result is returned.
    pub fn decode_many<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        if self.results.is_null() {
            return Ok(Vec::new());
        }
        Ok(Vec::<T>::deserialize(&self.results)?)
    }

    /// Decode the payload as a single record.
    pub fn decode_one<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.results)?)
    }
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
