use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row in the `session` table. Only the user id is persisted with the
/// session; the full user record is re-fetched on every request.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Session {
    pub sid: String,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
