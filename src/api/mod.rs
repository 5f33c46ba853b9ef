//! API service modules for the lemon.markets endpoints.
//!
//! Each service binds record types to the endpoints of one resource group.
//! List endpoints return a [`PaginatedStream`](crate::PaginatedStream);
//! single-resource endpoints return the decoded record.

mod account;
mod instruments;
mod market_data;
mod orders;
mod positions;
mod streaming;

pub use account::{AccountService, BankStatementsQuery};
pub use instruments::{InstrumentsQuery, InstrumentsService, VenuesQuery};
pub use market_data::{MarketDataQuery, MarketDataService, OhlcQuery, QuotesQuery, TradesQuery};
pub use orders::{OrdersQuery, OrdersService};
pub use positions::{PositionsQuery, PositionsService, StatementsQuery};
pub use streaming::StreamingService;

/// Join a path prefix and a caller-supplied identifier, escaping the latter.
pub(crate) fn resource_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_escapes_id() {
        assert_eq!(resource_path("orders", "ord_123"), "orders/ord_123");
        assert_eq!(resource_path("orders", "a/b c"), "orders/a%2Fb%20c");
    }
}
