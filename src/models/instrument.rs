//! Instrument and trading venue models.

use serde::{Deserialize, Serialize};

use super::enums::InstrumentType;
use super::primitives::{Isin, Mic};

/// A tradable instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// ISIN
    pub isin: Isin,
    /// German securities identification number
    #[serde(default)]
    pub wkn: Option<String>,
    /// Short name
    #[serde(default)]
    pub name: Option<String>,
    /// Full title
    #[serde(default)]
    pub title: Option<String>,
    /// Ticker symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Instrument type
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
    /// Venues the instrument is listed on
    #[serde(default)]
    pub venues: Vec<Venue>,
}

impl Instrument {
    /// Find the listing on a given venue.
    pub fn venue(&self, mic: &str) -> Option<&Venue> {
        self.venues
            .iter()
            .find(|v| v.mic.as_str().eq_ignore_ascii_case(mic))
    }
}

/// A trading venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue name
    #[serde(default)]
    pub name: Option<String>,
    /// Venue title
    #[serde(default)]
    pub title: Option<String>,
    /// Market Identifier Code
    pub mic: Mic,
    /// Whether the venue is currently open
    #[serde(default)]
    pub is_open: bool,
    /// Whether the instrument can be traded here
    #[serde(default)]
    pub tradable: bool,
    /// Trading currency
    #[serde(default)]
    pub currency: Option<String>,
}
