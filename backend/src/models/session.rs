//! Panel session rows: the explicit token-to-user mapping.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of `sesiones`. The cookie carries the raw token; only its
/// SHA-256 digest is stored here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: i64, token_hash: String, ttl_hours: u64, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::hours(ttl_hours as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expires_after_ttl() {
        let now = Utc::now();
        let session = Session::new(7, "digest".into(), 8, now);
        assert_eq!(session.user_id, 7);
        assert_eq!(session.created_at, now);
        assert_eq!(session.expires_at - now, Duration::hours(8));
    }
}
