//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! to prevent mixing up different types of IDs at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "`.")]
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            #[doc = concat!("Get the `", stringify!($name), "` as a string slice.")]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_newtype!(
    /// A strongly-typed order ID, e.g. `ord_pyPGQhhRDHKrNyF9TQlhjK8mWlvqmJK7ak`.
    ///
    /// # Example
    ///
    /// ```
    /// use lemon_markets_rs::OrderId;
    ///
    /// let id = OrderId::new("ord_abc");
    /// assert_eq!(id.as_str(), "ord_abc");
    /// ```
    OrderId
);

string_newtype!(
    /// International Securities Identification Number.
    Isin
);

string_newtype!(
    /// Market Identifier Code of a trading venue, e.g. `XETR`.
    Mic
);

/// Environment configuration for the trading API.
///
/// Determines which trading endpoint to use. Market data and realtime
/// endpoints are shared by both environments.
///
/// # Example
///
/// ```
/// use lemon_markets_rs::Environment;
///
/// let env: Environment = "paper".parse().unwrap();
/// assert_eq!(env.trading_base_url(), "https://paper-trading.lemon.markets/v1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Paper trading without real money.
    #[default]
    Paper,
    /// Live trading with real money.
    Live,
}

impl Environment {
    /// Get the base URL of the trading API.
    pub fn trading_base_url(&self) -> &'static str {
        match self {
            Environment::Paper => "https://paper-trading.lemon.markets/v1",
            Environment::Live => "https://trading.lemon.markets/v1",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Paper => write!(f, "paper"),
            Environment::Live => write!(f, "live"),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paper" => Ok(Environment::Paper),
            "live" | "money" => Ok(Environment::Live),
            other => Err(crate::Error::Config(format!(
                "unknown environment `{other}`, expected `paper` or `live`"
            ))),
        }
    }
}
