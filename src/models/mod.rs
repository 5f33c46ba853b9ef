//! Data models for the lemon.markets APIs.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - identifiers like `OrderId`, `Isin`, and the `Environment`
//! - [`enums`] - order sides, statuses, instrument types, etc.
//! - [`account`] - account, withdrawals, bank statements and documents
//! - [`order`] - orders and the order builder
//! - [`position`] - positions and position statements
//! - [`instrument`] - instruments and venues
//! - [`market_data`] - quotes, OHLC bars and trades
//! - [`streaming`] - realtime authentication token

pub mod primitives;
pub mod enums;
pub mod account;
pub mod order;
pub mod position;
pub mod instrument;
pub mod market_data;
pub mod streaming;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use account::*;
pub use order::*;
pub use position::*;
pub use instrument::*;
pub use market_data::*;
pub use streaming::*;
