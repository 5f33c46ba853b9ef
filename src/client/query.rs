//! Query-string encoding for request filters.
//!
//! Query structs are plain serde types. [`Query::encode`] flattens them into
//! URL pairs using each field's serialized name:
//!
//! - `null`, empty strings, zero numbers, `false` and empty lists are omitted
//! - list fields repeat their key (`isin=A&isin=B`)
//! - keys are emitted in lexicographic order
//!
//! Timestamp fields should use [`timestamp::serialize`] so they render as
//! `2021-11-05T00:00:00Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// Encoded query parameters, ready to be appended to a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a serializable filter struct.
    ///
    /// # Example
    ///
    /// ```
    /// use lemon_markets_rs::client::Query;
    ///
    /// #[derive(serde::Serialize)]
    /// struct Filter {
    ///     mic: Option<String>,
    ///     isin: Vec<String>,
    ///     limit: u32,
    /// }
    ///
    /// let query = Query::encode(&Filter {
    ///     mic: Some("XETR".into()),
    ///     isin: vec![],
    ///     limit: 0,
    /// }).unwrap();
    /// assert_eq!(query.to_query_string(), "mic=XETR");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the value does not serialize to a
    /// flat object of scalars and lists of scalars.
    pub fn encode<Q: Serialize + ?Sized>(query: &Q) -> Result<Self> {
        let value = serde_json::to_value(query)
            .map_err(|e| Error::InvalidInput(format!("query could not be serialized: {e}")))?;

        let fields = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => fields,
            other => {
                return Err(Error::InvalidInput(format!(
                    "query must serialize to an object, got {other}"
                )))
            }
        };

        let mut pairs = Vec::new();
        for (key, value) in fields {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar(&key, item)? {
                            pairs.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar(&key, other)? {
                        pairs.push((key, text));
                    }
                }
            }
        }
        // stable: repeated keys keep their list order
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Self { pairs })
    }

    /// Append a single pair.
    pub fn push(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Returns `true` if no parameters will be sent.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The encoded key/value pairs in send order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Look up the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as an `application/x-www-form-urlencoded` string without the
    /// leading `?`.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Append these parameters to `url`.
    pub(crate) fn apply(&self, url: &mut url::Url) {
        if self.pairs.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(self.pairs.iter());
    }
}

fn scalar(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                Ok(None)
            } else {
                Ok(Some(n.to_string()))
            }
        }
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Array(_) | Value::Object(_) => Err(Error::InvalidInput(format!(
            "query field `{key}` must be a scalar or a list of scalars"
        ))),
    }
}

/// Render a timestamp the way the API expects it in query strings.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serde helper for optional timestamp filters.
///
/// ```
/// use chrono::{DateTime, Utc};
///
/// #[derive(serde::Serialize)]
/// struct Filter {
///     #[serde(
///         skip_serializing_if = "Option::is_none",
///         serialize_with = "lemon_markets_rs::client::query::timestamp::serialize"
///     )]
///     from: Option<DateTime<Utc>>,
/// }
/// ```
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    /// Serialize `Some(time)` as a fixed-format RFC 3339 string.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&super::format_timestamp(time)),
            None => serializer.serialize_none(),
        }
    }
}
