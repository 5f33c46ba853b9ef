//! Realtime authentication token.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Short-lived token for connecting to the realtime quote feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationToken {
    /// Token to present to the feed
    pub token: String,
    /// User the token belongs to
    pub user_id: String,
    /// Expiry as Unix milliseconds
    pub expires_at: i64,
}

impl AuthenticationToken {
    /// Expiry as a timestamp.
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.expires_at).single()
    }

    /// Returns `true` if the token has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires().map_or(true, |expires| expires <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_expiry() {
        let json = r#"{"token": "tok", "user_id": "usr_1", "expires_at": 1640000000000}"#;
        let token: AuthenticationToken = serde_json::from_str(json).unwrap();
        let expires = token.expires().unwrap();
        assert_eq!(expires.timestamp(), 1_640_000_000);
        assert!(token.is_expired_at(expires));
        assert!(!token.is_expired_at(Utc.timestamp_opt(1_600_000_000, 0).unwrap()));
    }
}
