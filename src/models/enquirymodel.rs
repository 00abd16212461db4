use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Enquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub property_id: Option<i32>,
    pub agent_id: Option<i32>,
    pub interested_in: Option<String>,
    // Server-assigned, never updated
    pub created_at: DateTime<Utc>,
}
